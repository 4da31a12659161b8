use eda_charts::prelude::*;

const CARS: &str = "\
VIN,color,fuel,price,sold
v1,red,diesel,0,1
v2,red,petrol,10,0
v3,red,diesel,25,1
v4,red,petrol,40,0
v5,red,diesel,55,1
v6,red,petrol,60,0
v7,blue,diesel,75,1
v8,blue,petrol,90,0
v9,blue,diesel,100,2
v10,green,petrol,NA,0
";

fn cars() -> Dataset {
    read_dataset(CARS.as_bytes()).unwrap().dataset
}

#[test]
fn concentration_of_colors() {
    let config = ConcentrationConfig::default().top(2);
    let report = category_concentration(&cars(), "color", &config, &Canvas::pie()).unwrap();

    let labels: Vec<&str> = report.table.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["red", "blue", "Others"]);
    let shares: Vec<f64> = report.table.rows.iter().map(|r| r.concentration).collect();
    assert!((shares[0] - 0.6).abs() < 1e-12);
    assert!((shares[1] - 0.3).abs() < 1e-12);
    assert!((shares[2] - 0.1).abs() < 1e-12);
    assert_eq!(report.table.total, 10);

    assert_eq!(report.chart.title(), "Color: Concentration");
    assert!(report.chart.svg().contains("<svg"));
}

#[test]
fn distribution_by_sold_flag() {
    let config = DistributionConfig::default().buckets(5).range(0.0, 100.0);
    let report = continuous_split_distribution(&cars(), "price", "sold", &config, &Canvas::distribution()).unwrap();
    let dist = &report.distribution;

    assert_eq!(dist.buckets.boundaries(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
    // v9 has sold = 2; v10 has no price but still counts as a 0.
    assert_eq!(dist.excluded_rows, 1);
    assert_eq!(dist.positive.counts, vec![2, 0, 2, 0]);
    assert_eq!(dist.negative.counts, vec![1, 1, 1, 1]);
    for class in [&dist.positive, &dist.negative] {
        let total: f64 = class.fractions.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }
    assert_eq!(dist.positive.label, "True");
    assert_eq!(dist.negative.label, "False");
}

#[test]
fn split_rejects_non_binary_values() {
    let err = categorical_split_summary(&cars(), "fuel", "sold", &Canvas::split()).unwrap_err();
    assert!(matches!(err, EdaError::InvalidParameter { ref name, .. } if name == "sold"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn split_by_fuel() {
    let csv = "fuel,sold\ndiesel,1\ndiesel,1\npetrol,0\ndiesel,0\npetrol,1\nelectric,1\n";
    let data = read_dataset(csv.as_bytes()).unwrap().dataset;
    let report = categorical_split_summary(&data, "fuel", "sold", &Canvas::split()).unwrap();

    let labels: Vec<&str> = report.summary.categories.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["diesel", "electric", "petrol"]);
    let diesel = &report.summary.categories[0];
    assert_eq!((diesel.count, diesel.sum), (3, 2));
    assert!((diesel.mean - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(report.summary.categories[1].mean, 1.0);
}

#[test]
fn unknown_field_is_reported() {
    let err = category_concentration(&cars(), "shape", &ConcentrationConfig::default(), &Canvas::pie()).unwrap_err();
    assert!(matches!(err, EdaError::FieldNotFound { ref field } if field == "shape"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn charts_write_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.svg");
    let report = category_concentration(&cars(), "color", &ConcentrationConfig::default(), &Canvas::new(400, 400)).unwrap();
    report.chart.write_svg(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, report.chart.svg());
}
