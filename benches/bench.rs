// Criterion benchmarks for HomeVal Algo

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use homeval_algo::artifacts::{
    EncoderColumn, LinearModel, OneHotEncoder, ScalerColumn, StandardScaler, UnknownPolicy,
};
use homeval_algo::core::{normalize, Predictor};
use homeval_algo::models::{FieldValue, PredictRequest};
use std::sync::Arc;

fn yes_no() -> Vec<String> {
    vec!["No".to_string(), "Yes".to_string()]
}

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn create_encoder() -> OneHotEncoder {
    OneHotEncoder {
        columns: vec![
            EncoderColumn { name: "Basement".to_string(), categories: yes_no() },
            EncoderColumn {
                name: "Rooms".to_string(),
                categories: tokens(&["4", "5", "6", "7", "8", "9"]),
            },
            EncoderColumn { name: "Pool".to_string(), categories: yes_no() },
            EncoderColumn { name: "Fire Place".to_string(), categories: yes_no() },
            EncoderColumn { name: "Attached Garage".to_string(), categories: yes_no() },
            EncoderColumn { name: "Detached Garage".to_string(), categories: yes_no() },
            EncoderColumn { name: "Basement Finish".to_string(), categories: yes_no() },
            EncoderColumn { name: "Air Conditioning".to_string(), categories: yes_no() },
            EncoderColumn { name: "Multiple Residences".to_string(), categories: yes_no() },
            EncoderColumn { name: "Sale Year".to_string(), categories: tokens(&["2021"]) },
            EncoderColumn {
                name: "Sale Month".to_string(),
                categories: tokens(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]),
            },
            EncoderColumn {
                name: "Market Region".to_string(),
                categories: tokens(&["Central", "North East", "South West"]),
            },
            EncoderColumn {
                name: "Neighbourhood Area".to_string(),
                categories: tokens(&["River Heights", "St. Vital", "Transcona"]),
            },
            EncoderColumn {
                name: "Street Type".to_string(),
                categories: tokens(&["Avenue", "Crescent", "Street"]),
            },
            EncoderColumn {
                name: "Zoning".to_string(),
                categories: tokens(&["C2", "R1", "R2"]),
            },
            EncoderColumn {
                name: "Property Use Code".to_string(),
                categories: tokens(&["CONDO", "RES"]),
            },
            EncoderColumn {
                name: "Building Type".to_string(),
                categories: tokens(&["Duplex", "Single Family"]),
            },
        ],
        unknown_policy: UnknownPolicy::Reject,
    }
}

fn create_scaler() -> StandardScaler {
    StandardScaler {
        columns: vec![
            ScalerColumn { name: "Year Built".to_string(), mean: 1950.0, scale: 30.0 },
            ScalerColumn { name: "Total Living Area".to_string(), mean: 1100.0, scale: 400.0 },
            ScalerColumn { name: "Assessed Land Area".to_string(), mean: 5000.0, scale: 1800.0 },
            ScalerColumn { name: "Total Assessed Value".to_string(), mean: 260000.0, scale: 120000.0 },
            ScalerColumn { name: "Sewer Frontage Measurement".to_string(), mean: 45.0, scale: 15.0 },
            ScalerColumn { name: "Water Frontage Measurement".to_string(), mean: 45.0, scale: 15.0 },
        ],
    }
}

fn create_predictor() -> Predictor {
    let encoder = create_encoder();
    let scaler = create_scaler();

    let mut feature_names = encoder.feature_names();
    feature_names.extend(scaler.feature_names());
    let coefficients: Vec<f64> = (0..feature_names.len())
        .map(|i| 250.0 + (i as f64) * 13.0)
        .collect();
    let model = LinearModel {
        feature_names,
        coefficients,
        intercept: 180000.0,
    };

    Predictor::new(Arc::new(encoder), Arc::new(scaler), Arc::new(model)).unwrap()
}

fn create_request() -> PredictRequest {
    let mut request = PredictRequest::default();
    request
        .set("Basement", FieldValue::Bool(true))
        .set("Rooms", FieldValue::Number(7.0))
        .set("Pool", FieldValue::Bool(false))
        .set("Fireplace", FieldValue::Bool(true))
        .set("Attached Garage", FieldValue::Bool(true))
        .set("Detached Garage", FieldValue::Bool(false))
        .set("Basement Finish", FieldValue::Bool(true))
        .set("Air Conditioning", FieldValue::Bool(true))
        .set("Multiple Residences", FieldValue::Bool(false))
        .set("Sale Month", FieldValue::Text("June".to_string()))
        .set("Market Region", FieldValue::Text("Central".to_string()))
        .set("Neighbourhood Area", FieldValue::Text("River Heights".to_string()))
        .set("Street Type", FieldValue::Text("Avenue".to_string()))
        .set("Zoning", FieldValue::Text("R1".to_string()))
        .set("Property Use Code", FieldValue::Text("RES".to_string()))
        .set("Building Type", FieldValue::Text("Single Family".to_string()))
        .set("Year Built", FieldValue::Number(1965.0))
        .set("Total Living Area (sq.ft)", FieldValue::Number(1250.0))
        .set("Assessed Land Area (sq.ft)", FieldValue::Number(5400.0))
        .set("Total Assessed Value", FieldValue::Number(285000.0))
        .set("Sewer Frontage Measurement", FieldValue::Number(50.0))
        .set("Water Frontage Measurement", FieldValue::Number(50.0));
    request
}

fn bench_normalize(c: &mut Criterion) {
    let request = create_request();

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&request)));
    });
}

fn bench_encode(c: &mut Criterion) {
    let encoder = create_encoder();
    let (categorical, _) = normalize(&create_request()).unwrap();

    c.bench_function("encode", |b| {
        b.iter(|| encoder.transform(black_box(&categorical)));
    });
}

fn bench_predict(c: &mut Criterion) {
    let predictor = create_predictor();
    let request = create_request();

    c.bench_function("predict_end_to_end", |b| {
        b.iter(|| predictor.predict(black_box(&request)));
    });
}

criterion_group!(benches, bench_normalize, bench_encode, bench_predict);
criterion_main!(benches);
