/*!
 * End-to-end tests for the document-to-questions workflow
 */

use std::fs;

use serde_json::Value;

use docquiz::app_config::Config;
use docquiz::app_controller::Controller;
use docquiz::question::GenerationConfig;

use crate::common;

/// Test the full workflow: DOCX in, question report out
#[test]
fn test_run_withDocxFile_shouldWriteQuestionReport() {
    common::init_test_logging();
    let temp_dir = common::create_temp_dir().unwrap();
    let input_dir = temp_dir.path().to_path_buf();
    let output_dir = temp_dir.path().join("reports");

    let docx_path = common::create_test_docx(
        &input_dir,
        "lecture.docx",
        &[common::LECTURE_TEXT],
    )
    .unwrap();

    let controller = Controller::new().unwrap();
    controller
        .run(docx_path, output_dir.clone(), false, Some(42))
        .unwrap();

    let report_path = output_dir.join("lecture.questions.json");
    assert!(report_path.exists());

    let report: Value = serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["format"], "docx");
    assert_eq!(report["content_hash"].as_str().unwrap().len(), 64);
    assert!(!report["questions"]["vocabulary"].as_array().unwrap().is_empty());
    assert!(!report["questions"]["multiple_choice"].as_array().unwrap().is_empty());
}

/// Test that existing reports are skipped without the force flag
#[test]
fn test_run_withExistingReport_shouldSkipUnlessForced() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input_dir = temp_dir.path().to_path_buf();
    let output_dir = temp_dir.path().join("reports");

    let docx_path = common::create_test_docx(&input_dir, "lecture.docx", &[common::LECTURE_TEXT])
        .unwrap();

    let controller = Controller::new().unwrap();
    controller
        .run(docx_path.clone(), output_dir.clone(), false, Some(1))
        .unwrap();

    let report_path = output_dir.join("lecture.questions.json");
    let first_content = fs::read_to_string(&report_path).unwrap();

    // Second run with a different seed but no force flag leaves the report alone
    controller
        .run(docx_path.clone(), output_dir.clone(), false, Some(2))
        .unwrap();
    assert_eq!(fs::read_to_string(&report_path).unwrap(), first_content);

    // Forcing overwrites it
    controller.run(docx_path, output_dir, true, Some(2)).unwrap();
}

/// Test seeded runs produce identical question sets
#[test]
fn test_run_withSameSeed_shouldProduceIdenticalQuestions() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input_dir = temp_dir.path().to_path_buf();

    let docx_path = common::create_test_docx(&input_dir, "lecture.docx", &[common::LECTURE_TEXT])
        .unwrap();

    let controller = Controller::new().unwrap();
    let first_dir = temp_dir.path().join("first");
    let second_dir = temp_dir.path().join("second");
    controller
        .run(docx_path.clone(), first_dir.clone(), false, Some(9))
        .unwrap();
    controller
        .run(docx_path, second_dir.clone(), false, Some(9))
        .unwrap();

    let first: Value = serde_json::from_str(
        &fs::read_to_string(first_dir.join("lecture.questions.json")).unwrap(),
    )
    .unwrap();
    let second: Value = serde_json::from_str(
        &fs::read_to_string(second_dir.join("lecture.questions.json")).unwrap(),
    )
    .unwrap();

    assert_eq!(first["questions"], second["questions"]);
    assert_eq!(first["content_hash"], second["content_hash"]);
}

/// Test that documents with too little text are skipped without a report
#[test]
fn test_run_withInsufficientText_shouldSkipGeneration() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input_dir = temp_dir.path().to_path_buf();
    let output_dir = temp_dir.path().join("reports");

    let docx_path = common::create_test_docx(&input_dir, "stub.docx", &["Too short."]).unwrap();

    let controller = Controller::new().unwrap();
    controller.run(docx_path, output_dir.clone(), false, None).unwrap();

    assert!(!output_dir.join("stub.questions.json").exists());
}

/// Test directory processing picks up every supported document
#[test]
fn test_run_withDirectory_shouldProcessAllSupportedDocuments() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input_dir = temp_dir.path().join("lectures");
    fs::create_dir_all(&input_dir).unwrap();
    let output_dir = temp_dir.path().join("reports");

    common::create_test_docx(&input_dir, "first.docx", &[common::LECTURE_TEXT]).unwrap();
    common::create_test_pptx(&input_dir, "second.pptx", &[common::FOX_TEXT, common::LECTURE_TEXT])
        .unwrap();
    // Unsupported files are ignored during discovery
    common::create_test_file(&input_dir, "notes.txt", "ignored").unwrap();

    let controller = Controller::new().unwrap();
    controller.run(input_dir, output_dir.clone(), false, Some(3)).unwrap();

    assert!(output_dir.join("first.questions.json").exists());
    assert!(output_dir.join("second.questions.json").exists());
    assert!(!output_dir.join("notes.questions.json").exists());
}

/// Test the size limit bounds extraction
#[test]
fn test_run_withOversizedDocument_shouldFailWithSizeError() {
    let temp_dir = common::create_temp_dir().unwrap();
    let input_dir = temp_dir.path().to_path_buf();
    let output_dir = temp_dir.path().join("reports");

    let docx_path = common::create_test_docx(&input_dir, "big.docx", &[common::LECTURE_TEXT])
        .unwrap();

    let config = Config {
        max_document_bytes: 16,
        ..Config::default()
    };
    let controller = Controller::with_config(config).unwrap();

    let error = controller
        .run(docx_path, output_dir, false, None)
        .unwrap_err();
    assert!(error.to_string().contains("too large"));
}

/// Test direct text generation through the controller
#[test]
fn test_generate_from_text_withCustomCounts_shouldHonorConfig() {
    let config = Config {
        generation: GenerationConfig::new(2, 0, 1, 0),
        ..Config::default()
    };
    let controller = Controller::with_config(config).unwrap();

    let result = controller.generate_from_text(common::LECTURE_TEXT, Some(5));

    assert!(result.vocabulary.len() <= 2);
    assert!(!result.vocabulary.is_empty());
    assert!(result.fill_blank.is_empty());
    assert_eq!(result.multiple_choice.len(), 1);
    assert!(result.reading_comprehension.is_empty());
}
