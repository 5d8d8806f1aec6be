use pixline_raster::{rasterize, GridPoint, Segment};

const RADIUS: i32 = 7;

fn main() {
    let center = GridPoint::new(0, 0);
    let targets = [
        (7, 3), (3, 7), (-3, 7), (-7, 3),
        (-7, -3), (-3, -7), (3, -7), (7, -3),
    ];

    for (x, y) in targets {
        let target = GridPoint::new(x, y);
        let segment = Segment::new(center, target);
        let path = rasterize(center, target);

        println!("{} ({}, {} pixels)", segment, segment.case(), path.len());
        for row in (-RADIUS..=RADIUS).rev() {
            for col in -RADIUS..=RADIUS {
                let cell = GridPoint::new(col, row);
                if cell == center {
                    print!("A ");
                } else if cell == target {
                    print!("B ");
                } else if path.contains(cell) {
                    print!("# ");
                } else {
                    print!(". ");
                }
            }
            println!();
        }
        println!();
    }
}
