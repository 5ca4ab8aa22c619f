//! End-to-end analyses of realistic assay text.

use approx::assert_abs_diff_eq;
use dosecurve_rs::{
    analyze, analyze_batch, analyze_with_config, compute_goodness_of_fit, export_results_csv,
    AnalysisConfig, AnalysisResults, CiStatus, DoseCurveError, FitParams, LmConfig,
};

use crate::test_helpers::{assay_text, reference_params, CONCENTRATIONS};

#[test]
fn test_triplicate_assay() {
    let text = assay_text(&CONCENTRATIONS, &reference_params(), 3, 2.0, 77);
    let analysis = analyze(&text).unwrap();

    assert_eq!(analysis.points.len(), 9);
    assert!(analysis.summary.iter().all(|d| d.n == 3 && d.sem > 0.0));
    assert!(analysis.fit.converged);
    assert_abs_diff_eq!(analysis.results.ic50, 10.0, epsilon = 2.0);
    assert!(analysis.results.r_squared > 0.99);
    assert_eq!(analysis.confidence.status, CiStatus::Estimated);
    assert!(analysis.results.ic50_ci.lower < analysis.results.ic50);
    assert!(analysis.results.ic50_ci.upper > analysis.results.ic50);

    // Goodness of fit is computed on the per-concentration means
    let concentrations: Vec<f64> = analysis.summary.iter().map(|d| d.concentration).collect();
    let means: Vec<f64> = analysis.summary.iter().map(|d| d.mean).collect();
    let recomputed = compute_goodness_of_fit(&concentrations, &means, &analysis.fit);
    assert_eq!(recomputed, analysis.goodness);
    assert_eq!(analysis.goodness.residual_points.len(), 9);
}

#[test]
fn test_csv_report_layout() {
    let text = assay_text(&CONCENTRATIONS, &reference_params(), 2, 1.0, 5);
    let config = AnalysisConfig::default().with_curve_points(10);
    let analysis = analyze_with_config(&text, &config).unwrap();

    let csv = analysis.to_csv();
    assert_eq!(
        csv,
        export_results_csv(&analysis.results, &analysis.summary, &analysis.curve)
    );

    for needle in ["IC50", "Hill Slope", "R²", "Fitted X"] {
        assert!(csv.contains(needle), "missing {}", needle);
    }
    let lines: Vec<&str> = csv.lines().collect();
    assert!(lines.len() > 15);
    // 6 parameter lines, blank, header + 9 summaries, blank, header + 10 curve points
    assert_eq!(lines.len(), 6 + 1 + 10 + 1 + 11);
    assert_eq!(lines[7], "Concentration,Mean Response,SEM,N");
    assert_eq!(lines[18], "Fitted X,Fitted Y");
}

#[test]
fn test_minimal_dataset_reports_unbounded_intervals() {
    let analysis = analyze("Dose\tResp\n1\t95\n10\t52\n100\t9\n1000\t1").unwrap();

    assert_eq!(analysis.confidence.status, CiStatus::InsufficientDof);
    assert_eq!(analysis.results.ic50_ci.lower, f64::NEG_INFINITY);
    assert_eq!(analysis.results.ic50_ci.upper, f64::INFINITY);

    let csv = analysis.to_csv();
    assert!(csv.contains(",-Infinity,Infinity"));
    assert!(analysis.results.to_string().contains("[— – —]"));
}

#[test]
fn test_json_export() {
    let analysis = analyze(&assay_text(&CONCENTRATIONS, &reference_params(), 1, 0.5, 9)).unwrap();

    let json = analysis.results.to_json().unwrap();
    let back: AnalysisResults = serde_json::from_str(&json).unwrap();
    assert_abs_diff_eq!(back.ic50, analysis.results.ic50, epsilon = 1e-12);
    assert_eq!(back.converged, analysis.results.converged);

    let full = serde_json::to_value(&analysis).unwrap();
    assert!(full.get("goodness").is_some());
    assert!(full["rowsSkipped"].is_number());
}

#[test]
fn test_propagates_input_errors() {
    assert!(matches!(analyze("   "), Err(DoseCurveError::EmptyInput)));
    assert!(matches!(
        analyze("Conc,Resp\nx,y\n0,5"),
        Err(DoseCurveError::NoValidData)
    ));
    assert!(matches!(
        analyze("1,90\n1,91\n10,50\n100,10"),
        Err(DoseCurveError::InsufficientData { found: 3 })
    ));
}

#[test]
fn test_batch_matches_sequential() {
    let steep = FitParams::new(100.0, 10.0, 2.0, 2.0);
    let texts = vec![
        assay_text(&CONCENTRATIONS, &reference_params(), 3, 1.0, 1),
        "no data here".to_string(),
        assay_text(&CONCENTRATIONS, &steep, 2, 1.0, 2),
    ];
    let config = AnalysisConfig::default()
        .with_lm(LmConfig::default().with_max_iterations(500))
        .with_curve_points(25);

    let batch = analyze_batch(&texts, &config);

    assert_eq!(batch.len(), texts.len());
    for (text, result) in texts.iter().zip(&batch) {
        match (analyze_with_config(text, &config), result) {
            (Ok(expected), Ok(actual)) => assert_eq!(&expected, actual),
            (Err(_), Err(_)) => {}
            _ => panic!("batch and sequential analyses disagree"),
        }
    }
    assert!(batch[1].is_err());
}
