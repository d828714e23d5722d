use eye_centers::image::io::load_image;
use eye_centers::EyeCenterLocator;
use std::path::Path;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/testeye.jpg");

#[test]
#[ignore = "needs the reference eye crop at tests/data/testeye.jpg"]
fn reference_eye_lands_in_the_pupil_box() {
    let _ = env_logger::builder().is_test(true).try_init();
    let img = load_image(Path::new(FIXTURE)).unwrap();

    let report = EyeCenterLocator::default()
        .locate_with_report(&img)
        .unwrap();
    let c = report.center;
    assert!(
        (83..=110).contains(&c.x) && (28..=54).contains(&c.y),
        "center ({}, {}) outside x∈[83,110], y∈[28,54]",
        c.x,
        c.y
    );
    assert!(!report.low_confidence);
}
