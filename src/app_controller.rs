use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use walkdir::WalkDir;

use crate::app_config::Config;
use crate::document_processor::{DocumentFormat, ExtractedDocument};
use crate::errors::ExtractionError;
use crate::question::{GenerationResult, QuestionGenerator};

// @module: Application controller for the document-to-assessment workflow

/// Report written for each processed document
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    /// Source document path
    pub source_file: String,

    /// Detected document format
    pub format: String,

    /// SHA-256 hash of the normalized text, the key for external
    /// audio conversion caching
    pub content_hash: String,

    /// Local timestamp of the generation run
    pub generated_at: String,

    /// The generated questions, all four types
    pub questions: GenerationResult,
}

/// Main application controller for question generation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the workflow on a file or a directory of documents
    pub fn run(
        &self,
        input_path: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
        seed: Option<u64>,
    ) -> Result<()> {
        if !input_path.exists() {
            return Err(anyhow::anyhow!(
                "Input path does not exist: {:?}",
                input_path
            ));
        }

        if input_path.is_dir() {
            self.run_folder(input_path, output_dir, force_overwrite, seed)
        } else {
            self.run_file(&input_path, &output_dir, force_overwrite, seed)
        }
    }

    /// Process a single document file into a question report
    fn run_file(
        &self,
        input_file: &Path,
        output_dir: &Path,
        force_overwrite: bool,
        seed: Option<u64>,
    ) -> Result<()> {
        let start_time = std::time::Instant::now();

        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let output_path = Self::report_output_path(input_file, output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, report already exists (use -f to force overwrite)");
            return Ok(());
        }

        let format = DocumentFormat::from_extension(input_file);
        if !format.is_text_extractable() {
            return Err(ExtractionError::UnsupportedFormat(format.to_string()).into());
        }

        // Bound the input before extraction, the only potentially slow step
        let size = fs::metadata(input_file)?.len();
        if size > self.config.max_document_bytes {
            return Err(ExtractionError::DocumentTooLarge {
                size,
                limit: self.config.max_document_bytes,
            }
            .into());
        }

        let document = ExtractedDocument::extract_from_file(input_file)?;
        debug!(
            "Extracted {} characters from {:?}",
            document.text.char_count(),
            input_file
        );

        if document.text.char_count() < self.config.min_text_chars {
            warn!(
                "Skipping {:?}: extracted text is too short for generation ({} < {} chars)",
                input_file,
                document.text.char_count(),
                self.config.min_text_chars
            );
            return Ok(());
        }

        let questions = self.generate_from_document(&document, seed);
        let report = GenerationReport {
            source_file: input_file.display().to_string(),
            format: document.format.to_string(),
            content_hash: document.content_hash(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            questions,
        };

        let content = serde_json::to_string_pretty(&report)
            .context("Failed to serialize generation report")?;
        fs::write(&output_path, content)
            .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

        info!(
            "Generated {} questions from {:?} in {:.1}s -> {:?}",
            report.questions.total(),
            input_file,
            start_time.elapsed().as_secs_f32(),
            output_path
        );

        Ok(())
    }

    /// Process every supported document in a directory
    fn run_folder(
        &self,
        input_dir: PathBuf,
        output_dir: PathBuf,
        force_overwrite: bool,
        seed: Option<u64>,
    ) -> Result<()> {
        let document_files = Self::find_document_files(&input_dir)?;
        if document_files.is_empty() {
            warn!("No supported documents found in {:?}", input_dir);
            return Ok(());
        }

        info!(
            "Processing {} documents from {:?}",
            document_files.len(),
            input_dir
        );

        let progress = ProgressBar::new(document_files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut failures = 0;
        for file in &document_files {
            progress.set_message(
                file.file_name()
                    .map(|name| name.to_string_lossy().to_string())
                    .unwrap_or_default(),
            );

            if let Err(e) = self.run_file(file, &output_dir, force_overwrite, seed) {
                warn!("Failed to process {:?}: {}", file, e);
                failures += 1;
            }

            progress.inc(1);
        }
        progress.finish_with_message("done");

        if failures > 0 {
            warn!(
                "Finished with {} failures out of {} documents",
                failures,
                document_files.len()
            );
        }

        Ok(())
    }

    /// Generate questions from an extracted document.
    ///
    /// Each call builds its own random source so concurrent callers never
    /// share RNG state; a seed makes the output reproducible.
    pub fn generate_from_document(
        &self,
        document: &ExtractedDocument,
        seed: Option<u64>,
    ) -> GenerationResult {
        let generator = QuestionGenerator::with_config(self.config.generation.clone());
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        generator.generate_from_normalized(&document.text, &mut rng)
    }

    /// Generate questions directly from a raw string, for callers that do
    /// their own extraction
    pub fn generate_from_text(&self, text: &str, seed: Option<u64>) -> GenerationResult {
        let generator = QuestionGenerator::with_config(self.config.generation.clone());
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        generator.generate_all(text, &mut rng)
    }

    /// Find all text-extractable documents under a directory
    fn find_document_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && DocumentFormat::from_extension(path).is_text_extractable() {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Output path for a document's question report
    fn report_output_path(input_file: &Path, output_dir: &Path) -> PathBuf {
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str(".questions.json");

        output_dir.join(output_filename)
    }
}
