//! PDF 收集元件
//!
//! 互動流程：選擇來源 → 收集與排序 → 確認 → 選擇目的地 → 複製，
//! 完成後可以再處理另一個來源資料夾

use super::collector::CollectionMode;
use super::order_resolver::OrderedBatch;
use super::pipeline::{CollectOptions, RunOutcome, copy_batch, prepare_batch};
use crate::config::Config;
use crate::config::save::{add_recent_path, save_settings};
use crate::error::{CollectError, InputKind};
use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 批次摘要最多列出的檔名數
const PREVIEW_LIMIT: usize = 10;

/// 單次執行的結果
enum RunStep {
    Finished,
    NoMatches,
    Cancelled,
}

pub struct PdfCollector<'a> {
    config: &'a mut Config,
    shutdown_signal: Arc<AtomicBool>,
}

impl<'a> PdfCollector<'a> {
    pub fn new(config: &'a mut Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            shutdown_signal,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", style(t!("collector.title")).cyan().bold());

        loop {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("收到中斷訊號，停止處理");
                break;
            }

            match self.run_once() {
                Ok(RunStep::NoMatches) => {
                    println!("{}", style(t!("collector.no_pdfs")).yellow());
                    continue;
                }
                Ok(RunStep::Finished | RunStep::Cancelled) => {}
                Err(e) => match e.downcast_ref::<CollectError>() {
                    Some(CollectError::MissingInput { .. }) => {
                        eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
                        break;
                    }
                    Some(_) => {
                        eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
                    }
                    None => return Err(e),
                },
            }

            if self.shutdown_signal.load(Ordering::SeqCst) || !self.confirm_run_again()? {
                break;
            }
        }

        println!("{}", style(t!("collector.goodbye")).green());
        Ok(())
    }

    fn run_once(&mut self) -> Result<RunStep> {
        let Some(source_root) = self.prompt_path(InputKind::SourceRoot)? else {
            return Err(CollectError::MissingInput {
                input: InputKind::SourceRoot,
            }
            .into());
        };

        let options = CollectOptions::from_settings(&self.config.settings);

        println!("{}", style(t!("collector.scanning")).dim());
        let batch = prepare_batch(&source_root, &options)?;
        self.remember_path(InputKind::SourceRoot, &source_root);

        if batch.is_empty() {
            return Ok(RunStep::NoMatches);
        }

        self.print_batch_summary(&batch, &options);

        if !self.confirm_copy()? {
            println!("{}", style(t!("common.cancelled")).yellow());
            return Ok(RunStep::Cancelled);
        }

        let Some(destination_root) = self.prompt_path(InputKind::DestinationRoot)? else {
            return Err(CollectError::MissingInput {
                input: InputKind::DestinationRoot,
            }
            .into());
        };
        self.remember_path(InputKind::DestinationRoot, &destination_root);

        let progress_bar = ProgressBar::new(batch.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
                .progress_chars("#>-"),
        );
        progress_bar.set_message(t!("collector.copying").to_string());

        let outcome = copy_batch(&batch, &source_root, &destination_root, |event| {
            progress_bar.set_position(event.index as u64);
            progress_bar.set_message(event.target_name.clone());
        });

        match outcome {
            Ok(RunOutcome::Completed {
                destination,
                file_count,
            }) => {
                progress_bar.finish_with_message(t!("common.done").to_string());
                self.print_result(&destination, file_count);
                Ok(RunStep::Finished)
            }
            Ok(RunOutcome::NoMatchesFound) => {
                progress_bar.finish_and_clear();
                Ok(RunStep::NoMatches)
            }
            Err(e) => {
                progress_bar.abandon_with_message(t!("collector.copy_aborted").to_string());
                Err(e.into())
            }
        }
    }

    fn recent_paths(&self, input: InputKind) -> &[String] {
        match input {
            InputKind::SourceRoot => &self.config.settings.recent_source_paths,
            InputKind::DestinationRoot => &self.config.settings.recent_destination_paths,
        }
    }

    /// 選擇路徑；按 ESC 或輸入空白時回傳 `None`
    fn prompt_path(&self, input: InputKind) -> Result<Option<PathBuf>> {
        let (select_prompt, input_prompt) = match input {
            InputKind::SourceRoot => (t!("collector.select_source"), t!("collector.input_source")),
            InputKind::DestinationRoot => (
                t!("collector.select_destination"),
                t!("collector.input_destination"),
            ),
        };

        let recent_paths = self.recent_paths(input);

        if recent_paths.is_empty() {
            return self.input_path(&input_prompt);
        }

        let mut options: Vec<String> = recent_paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let exists = Path::new(p).is_dir();
                let indicator = if exists { "✓" } else { "✗" };
                format!("{} [{}] {}", i + 1, indicator, p)
            })
            .collect();
        options.push(t!("collector.new_path").to_string());

        println!("{}", style(t!("common.esc_hint")).dim());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(select_prompt)
            .items(&options)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(None),
            Some(idx) if idx < recent_paths.len() => Ok(Some(PathBuf::from(&recent_paths[idx]))),
            Some(_) => self.input_path(&input_prompt),
        }
    }

    fn input_path(&self, prompt: &str) -> Result<Option<PathBuf>> {
        let path: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let path = path.trim();
        Ok((!path.is_empty()).then(|| PathBuf::from(path)))
    }

    fn remember_path(&mut self, input: InputKind, path: &Path) {
        let path = path.display().to_string();
        let settings = &mut self.config.settings;
        let recent_paths = match input {
            InputKind::SourceRoot => &mut settings.recent_source_paths,
            InputKind::DestinationRoot => &mut settings.recent_destination_paths,
        };
        add_recent_path(recent_paths, &path);

        if let Err(e) = save_settings(settings) {
            warn!("無法儲存路徑歷史: {e}");
        }
    }

    fn confirm_copy(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("collector.confirm_copy"))
            .default(true)
            .interact()?;
        Ok(confirm)
    }

    fn confirm_run_again(&self) -> Result<bool> {
        let confirm = Confirm::new()
            .with_prompt(t!("collector.run_again"))
            .default(false)
            .interact()?;
        Ok(confirm)
    }

    fn print_batch_summary(&self, batch: &OrderedBatch, options: &CollectOptions) {
        let mode = match options.mode {
            CollectionMode::Primary => t!("settings.mode.primary"),
            CollectionMode::Legacy => t!("settings.mode.legacy"),
        };

        println!();
        println!(
            "{}",
            style(t!("collector.found", count = batch.len())).green()
        );
        println!("  {} {}", style(t!("collector.summary_mode")).dim(), mode);
        if options.manifest.is_some() {
            println!("  {}", style(t!("collector.summary_manifest")).dim());
        }
        println!();

        let display_count = batch.len().min(PREVIEW_LIMIT);
        for file in batch.iter().take(display_count) {
            println!("  {} {}", style("→").dim(), file.target_name);
        }
        if batch.len() > display_count {
            println!(
                "  {} {}",
                style("⋯").dim(),
                t!("collector.more", count = batch.len() - display_count)
            );
        }
        println!();
    }

    fn print_result(&self, destination: &Path, file_count: usize) {
        println!();
        println!("{}", style(t!("collector.result_title")).cyan().bold());
        println!(
            "  {}",
            style(t!(
                "collector.success",
                count = file_count,
                path = destination.display()
            ))
            .green()
        );

        info!("複製完成 - {} 個檔案: {}", file_count, destination.display());
    }
}
