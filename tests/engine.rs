//! End-to-end checks: catalog file → body table → positions

use std::io::Write;

use approx::assert_relative_eq;
use flate2::write::GzEncoder;
use flate2::Compression;
use orrery::constants::{KM_PER_AU, KM_PER_PARSEC};
use orrery::time::datetime_from_days;
use orrery::{BodyKind, Cartesian3, Loader, PositionFn, TimeFn};
use tempfile::TempDir;

const TEN_PC_EXCERPT: &str = "\
OBJ_NAME,COMMON_NAME,OBJ_CAT,RA,DEC,PARALLAX,PMRA,PMDEC,RV
Sun,Sun,*,,,,,,
Proxima Centauri,Proxima Cen,LM,217.42894,-62.67949,768.0665,-3781.741,769.465,-22.204
Alpha Centauri A,Rigil Kentaurus,*,219.90206,-60.83399,747.1,-3679.25,473.67,-21.4
Barnard's Star,Barnard's Star,*,269.45208,4.69339,546.9759,-801.551,10362.394,-110.6
Luhman 16 A,,BD,162.32900,-53.31947,501.557,-2762.16,357.38,
Proxima Cen b,,Planet,217.42894,-62.67949,768.0665,,,
Broken Row,,*,12.0,-4.0,0,,,
";

fn write_gzipped(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(text.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

#[test]
fn test_gzipped_catalog_to_positions() {
    let dir = TempDir::new().unwrap();
    let path = write_gzipped(&dir, "ten_pc.csv.gz", TEN_PC_EXCERPT);

    let table = Loader::new().with_catalog_path(&path).load_bodies().unwrap();

    // Sun, 8 planets, 4 stars; the Sun row, the planet row and the zero parallax are dropped
    assert_eq!(table.len(), 13);
    let report = table.report();
    assert_eq!((report.accepted, report.rejected, report.skipped_planets), (4, 2, 1));

    let positions = table.positions_at(9_000.0);
    assert_eq!(positions.len(), table.len());
    assert!(positions.iter().all(|(_, p)| p.as_ref().map(Cartesian3::is_finite).unwrap_or(false)));
}

#[test]
fn test_nearby_star_distances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ten_pc.csv");
    std::fs::write(&path, TEN_PC_EXCERPT).unwrap();
    let table = Loader::new()
        .with_catalog_path(&path)
        .with_include_planets(false)
        .load_bodies()
        .unwrap();

    let proxima = table.get("Proxima Cen").unwrap();
    let distance_pc = proxima.position_at(0.0).unwrap().magnitude() / KM_PER_PARSEC;
    assert_relative_eq!(distance_pc, 1000.0 / 768.0665, max_relative = 1e-12);

    let luhman = table.get("Luhman 16 A").unwrap();
    assert_eq!(luhman.kind, BodyKind::BrownDwarf);
    // No radial velocity in the catalog, so the motion is purely tangential
    let velocity = luhman.velocity.unwrap();
    let position = luhman.position_at(0.0).unwrap();
    let radial = velocity.dot(&position) / position.magnitude();
    assert!(radial.abs() < 1e-9 * velocity.magnitude());
}

#[test]
fn test_barnards_star_approaches() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ten_pc.csv");
    std::fs::write(&path, TEN_PC_EXCERPT).unwrap();
    let table = Loader::new()
        .with_catalog_path(&path)
        .with_include_planets(false)
        .load_bodies()
        .unwrap();

    // Barnard's Star is approaching at ~110 km/s; closest approach is ~10,000 years out
    let barnard = table.get("Barnard's Star").unwrap();
    let now = barnard.position_at(0.0).unwrap().magnitude();
    let in_5000_years = barnard.position_at(5_000.0 * 365.25).unwrap().magnitude();
    let in_50000_years = barnard.position_at(50_000.0 * 365.25).unwrap().magnitude();
    assert!(in_5000_years < now);
    assert!(in_50000_years > in_5000_years);

    // Stars move linearly: equal intervals give equal displacements
    let a = barnard.position_at(-1_000.0).unwrap();
    let b = barnard.position_at(0.0).unwrap();
    let c = barnard.position_at(1_000.0).unwrap();
    assert!(((b - a) - (c - b)).magnitude() < 1e-6 * (b - a).magnitude());
}

#[test]
fn test_planet_nested_under_a_star() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ten_pc.csv");
    std::fs::write(&path, TEN_PC_EXCERPT).unwrap();
    let table = Loader::new()
        .with_catalog_path(&path)
        .load_bodies()
        .unwrap();

    // A hypothetical Earth twin around Proxima, composed from existing functions
    let proxima = table.get("Proxima Cen").unwrap();
    let earth = table.get("Earth").unwrap();
    let twin = PositionFn::relative_to(proxima.position.clone(), earth.position.clone());

    for t in [-36_525.0, 0.0, 18_262.5] {
        let offset = twin.position_at(t).unwrap() - proxima.position_at(t).unwrap();
        let r_au = offset.magnitude() / KM_PER_AU;
        assert!(r_au > 0.98 && r_au < 1.02, "r = {} AU at t = {}", r_au, t);
    }
}

#[test]
fn test_planets_over_the_fitted_interval() {
    let table = Loader::new().load_bodies().unwrap();

    // Yearly samples 1800-2050
    let mut t = -73_048.5;
    while t < 18_262.5 {
        assert!(datetime_from_days(t).is_ok());
        for (name, position) in table.positions_at(t) {
            let p = position.unwrap();
            assert!(p.is_finite(), "{} at {}", name, t);
            if name != "Sun" {
                let r_au = p.magnitude() / KM_PER_AU;
                assert!(r_au > 0.3 && r_au < 31.0, "{} at {} AU", name, r_au);
            }
        }
        t += 365.25;
    }
}
