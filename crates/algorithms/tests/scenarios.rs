//! Concrete end-to-end scenarios on small hand-built grids

use morphkit_algorithms::fill::fill_holes;
use morphkit_algorithms::labeling::{label, FOREGROUND_TAG};
use morphkit_algorithms::majority::majority;
use morphkit_algorithms::morphology::{dilate, enhance, erode, top_hat, StructuringElement};
use morphkit_algorithms::threshold::{binarize, DEFAULT_THRESHOLD};
use morphkit_core::{Error, Raster};

fn single_spot() -> Raster<u8> {
    let mut raster: Raster<u8> = Raster::new(5, 5);
    raster.set(2, 2, 255).unwrap();
    raster
}

#[test]
fn test_spot_erode_and_dilate_full_kernel() {
    let se = StructuringElement::Rect(3);

    let eroded = erode(&single_spot(), &se, 0).unwrap();
    assert!(eroded.iter().all(|&v| v == 0));

    let dilated = dilate(&single_spot(), &se, 0).unwrap();
    for r in 0..5 {
        for c in 0..5 {
            let expected = if (1..=3).contains(&r) && (1..=3).contains(&c) { 255 } else { 0 };
            assert_eq!(dilated.get(r, c).unwrap(), expected, "pixel ({}, {})", r, c);
        }
    }
}

#[test]
fn test_majority_on_full_3x3() {
    let result = majority(&Raster::filled(3, 3, 255u8), 0).unwrap();
    #[rustfmt::skip]
    let expected = [
        0, 255, 0,
        255, 255, 255,
        0, 255, 0,
    ];
    assert_eq!(result.iter().copied().collect::<Vec<_>>(), expected);
}

#[test]
fn test_enhance_saturates_on_constant_grids() {
    for se in [
        StructuringElement::Ellipse(3),
        StructuringElement::Rect(5),
        StructuringElement::top_hat_preset(),
    ] {
        let dark = enhance(&Raster::new(6, 6), &se).unwrap();
        assert!(dark.iter().all(|&v| v == 0));

        let bright = enhance(&Raster::filled(6, 6, 255u8), &se).unwrap();
        assert!(bright.iter().all(|&v| v == 255));
    }
}

#[test]
fn test_even_kernel_rejected_everywhere() {
    let raster = single_spot();
    let se = StructuringElement::Ellipse(4);
    assert!(matches!(erode(&raster, &se, 0), Err(Error::InvalidKernelSize { size: 4 })));
    assert!(matches!(dilate(&raster, &se, 0), Err(Error::InvalidKernelSize { size: 4 })));
    assert!(matches!(top_hat(&raster, &se), Err(Error::InvalidKernelSize { size: 4 })));
}

#[test]
fn test_scan_cleanup_pipeline() {
    // Dark hollow square on bright paper, one stray dark pixel
    let mut page = Raster::filled(12, 12, 220u8);
    for i in 2..9 {
        for (r, c) in [(2, i), (8, i), (i, 2), (i, 8)] {
            page.set(r, c, 30).unwrap();
        }
    }
    page.set(10, 11, 30).unwrap();

    let mask = binarize(&page, DEFAULT_THRESHOLD).unwrap();
    assert_eq!(mask.get(2, 2).unwrap(), 255);
    assert_eq!(mask.get(5, 5).unwrap(), 0);

    let before = label(&mask).unwrap();
    assert_eq!(before.by_tag(FOREGROUND_TAG).len(), 2);
    assert_eq!(before.background.len(), 2, "outside and the enclosed hole");

    let filled = fill_holes(&mask).unwrap();
    assert_eq!(filled.get(5, 5).unwrap(), 255);
    let after = label(&filled).unwrap();
    assert_eq!(after.background.len(), 1);
    assert_eq!(after.largest(FOREGROUND_TAG).unwrap().size, 49);
}

#[test]
fn test_algorithm_trait_names() {
    use morphkit_algorithms::prelude::*;
    let names = [
        Erode.name(),
        Dilate.name(),
        Opening.name(),
        Closing.name(),
        TopHat.name(),
        BottomHat.name(),
        Enhance.name(),
        Binarize.name(),
        FillHoles.name(),
        Majority.name(),
        Label.name(),
    ];
    assert_eq!(names.len(), 11);
    assert!(names.iter().all(|n| !n.is_empty()));
}
