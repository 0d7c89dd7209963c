use life::Grid;
use life::render::Style;

fn parse(rows: &str) -> Grid {
    let rows = life::pattern::parse(rows).unwrap();

    Grid::from_rows(rows[0].len(), rows.len(), &rows).unwrap()
}

#[test]
fn glider_moves() {
    let mut grid = parse(
        ".#....\n\
         ..#...\n\
         ###...\n\
         ......\n\
         ......\n\
         ......\n",
    );

    grid.advance().unwrap();
    let frame = Style::Glyph.render(&grid);

    insta::assert_snapshot!(frame.trim_end(), @r"
    ......
    #.#...
    .##...
    .#....
    ......
    ......
    ");

    for _ in 0..3 {
        grid.advance().unwrap();
    }
    let frame = Style::Glyph.render(&grid);

    insta::assert_snapshot!(frame.trim_end(), @r"
    ......
    ..#...
    ...#..
    .###..
    ......
    ......
    ");
}

#[test]
fn block_is_still() {
    let mut grid = parse("....\n.##.\n.##.\n....\n");

    grid.advance().unwrap();
    let frame = Style::Binary.render(&grid);

    insta::assert_snapshot!(frame.trim_end(), @r"
    0000
    0110
    0110
    0000
    ");
}

#[test]
fn glider_dies_in_the_corner() {
    // Nothing survives past the edges, so a glider running into the corner settles into a block
    let mut grid = parse(".#..\n..#.\n###.\n....\n");

    for _ in 0..8 {
        grid.advance().unwrap();
    }
    let frame = Style::Glyph.render(&grid);

    insta::assert_snapshot!(frame.trim_end(), @r"
    ....
    ....
    ..##
    ..##
    ");
}

#[test]
fn blinker_flips() {
    let mut grid = parse(".....\n..#..\n..#..\n..#..\n.....\n");

    grid.advance().unwrap();
    let frame = Style::Glyph.render(&grid);

    insta::assert_snapshot!(frame.trim_end(), @r"
    .....
    .....
    .###.
    .....
    .....
    ");

    grid.advance().unwrap();
    let frame = Style::Glyph.render(&grid);

    insta::assert_snapshot!(frame.trim_end(), @r"
    .....
    ..#..
    ..#..
    ..#..
    .....
    ");
}
