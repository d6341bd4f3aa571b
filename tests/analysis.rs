//! End-to-end checks of the analysis core through the public API.

use pretty_assertions::assert_eq;

use swatch::{
    build_histogram, to_csv, to_gpl, Colour, ColourTable, Histogram, KMeans, PixelBuffer,
    PixelSource, RandomSampler, Region, SequenceRng, SwatchError,
};

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn rows(table: &ColourTable) -> Vec<(String, u64, f64)> {
    table
        .iter()
        .map(|e| (e.hex.clone(), e.count, e.ratio))
        .collect()
}

fn scenario_image() -> PixelBuffer {
    PixelBuffer::new(2, 2, vec![RED, RED, GREEN, BLUE]).unwrap()
}

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::filled(width, height, [0, 0, 0, 255]);
    for y in 0..height {
        for x in 0..width {
            let a = if (x + y) % 7 == 0 { 0 } else { 255 };
            buf.put(x, y, [(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) % 256) as u8, a]);
        }
    }
    buf
}

#[test]
fn histogram_of_two_by_two() {
    let table = build_histogram(&scenario_image(), None, 1).unwrap();

    assert_eq!(
        rows(&table),
        vec![
            ("#FF0000".to_string(), 2, 0.5),
            ("#00FF00".to_string(), 1, 0.25),
            ("#0000FF".to_string(), 1, 0.25),
        ]
    );
}

#[test]
fn histogram_step_255_keeps_three_buckets() {
    let exact = build_histogram(&scenario_image(), None, 1).unwrap();
    let coarse = build_histogram(&scenario_image(), None, 255).unwrap();

    assert_eq!(rows(&coarse), rows(&exact));
}

#[test]
fn thin_region_is_rejected() {
    let buf = PixelBuffer::filled(8, 8, RED);

    let err = build_histogram(&buf, Some(Region::new(0, 0, 1, 5)), 1).unwrap_err();
    assert!(matches!(err, SwatchError::InvalidRegion { width: 1, height: 5 }));

    let err = build_histogram(&buf, Some(Region::new(0, 0, 5, 1)), 1).unwrap_err();
    assert!(matches!(err, SwatchError::InvalidRegion { .. }));

    assert!(build_histogram(&buf, Some(Region::new(0, 0, 2, 2)), 1).is_ok());
}

#[test]
fn transparent_image_histogram_is_empty() {
    let buf = PixelBuffer::filled(4, 4, [10, 20, 30, 0]);
    let table = build_histogram(&buf, None, 1).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.total, 16);
    assert_eq!(to_csv(&table), "hex,r,g,b,count,ratio\n");
}

#[test]
fn histogram_is_exhaustive_and_ordered() {
    let buf = PixelBuffer::filled(4, 4, RED);
    let mut opaque = gradient(37, 23);
    for y in 0..23 {
        for x in 0..37 {
            let [r, g, b, _] = opaque.pixel(x, y);
            opaque.put(x, y, [r, g, b, 255]);
        }
    }

    for step in [1, 2, 16, 100, 255] {
        for source in [&buf as &dyn PixelSource, &opaque] {
            let table = Histogram::new(step).full(source);

            assert_eq!(table.counted(), table.total);
            assert!(table.entries.windows(2).all(|w| w[0].count >= w[1].count));

            let mut hexes: Vec<&str> = table.iter().map(|e| e.hex.as_str()).collect();
            hexes.sort();
            hexes.dedup();
            assert_eq!(hexes.len(), table.len());
        }
    }
}

#[test]
fn region_histogram_matches_cropped_buffer() {
    let source = gradient(20, 20);
    let region = Region::new(3, 5, 9, 7);

    let mut cropped = Vec::new();
    for y in region.y..region.y + region.h {
        for x in region.x..region.x + region.w {
            cropped.push(source.pixel(x, y));
        }
    }
    let cropped = PixelBuffer::new(region.w, region.h, cropped).unwrap();

    let a = Histogram::new(4).region(&source, region).unwrap();
    let b = Histogram::new(4).full(&cropped);
    assert_eq!(a, b);
    assert_eq!(a.total, 63);
}

#[test]
fn kmeans_two_colour_halves() {
    let mut buf = PixelBuffer::filled(30, 30, RED);
    for y in 0..30 {
        for x in 15..30 {
            buf.put(x, y, BLUE);
        }
    }
    let kmeans = KMeans::new(3, 3, 5);
    let sampled = kmeans.sample(&buf).len() as u64;

    for seed in 0..10 {
        let table = kmeans.quantize(&buf, &mut RandomSampler::from_seed(Some(seed)));

        assert_eq!(table.len(), 3);
        assert_eq!(table.counted(), sampled);

        let matching = table
            .iter()
            .filter(|e| {
                e.colour() == Colour::rgb(255, 0, 0) || e.colour() == Colour::rgb(0, 0, 255)
            })
            .count();
        assert!(matching >= 2, "seed {}: {:?}", seed, table);
    }
}

#[test]
fn kmeans_fixed_sequence_outcome() {
    let buf = scenario_image();
    // Seed from the red, green and blue samples in that order.
    let table = KMeans::new(3, 1, 2).quantize(&buf, &mut SequenceRng::new(vec![0, 2, 3]));

    assert_eq!(
        rows(&table),
        vec![
            ("#FF0000".to_string(), 2, 0.5),
            ("#00FF00".to_string(), 1, 0.25),
            ("#0000FF".to_string(), 1, 0.25),
        ]
    );
    assert_eq!(
        to_gpl(&table, "palette_K3"),
        "GIMP Palette\nName: palette_K3\nColumns: 0\n# R G B  Name\n255 0 0\t#FF0000\n0 255 0\t#00FF00\n0 0 255\t#0000FF"
    );
}

#[test]
fn kmeans_all_transparent_is_empty() {
    let buf = PixelBuffer::filled(6, 6, [1, 2, 3, 0]);
    let table = KMeans::default().quantize(&buf, &mut RandomSampler::from_seed(None));

    assert!(table.is_empty());
}
