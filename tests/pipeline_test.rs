//! 整合測試 - 以暫存目錄建立來源樹，驗證收集、排序與複製的完整流程

use std::fs;
use std::path::{Path, PathBuf};

use pdf_collector::component::pdf_collector::pipeline::{copy_batch, prepare_batch, run};
use pdf_collector::component::pdf_collector::{
    CollectOptions, CollectionMode, ManifestOptions, ProgressEvent, RunOutcome, RunRequest,
    collect,
};
use pdf_collector::CollectError;
use tempfile::TempDir;

fn create_pdf(base: &Path, relative: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, format!("%PDF-1.4 {relative}")).unwrap();
}

/// 建立 `Jobs/A/Complete/x.pdf` 與 `Jobs/B/Completed/y.pdf`
fn jobs_tree(temp_dir: &TempDir) -> PathBuf {
    let root = temp_dir.path().join("Jobs");
    create_pdf(&root, "A/Complete/x.pdf");
    create_pdf(&root, "B/Completed/y.pdf");
    root
}

fn sorted_file_names(directory: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(directory)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn request(source: &Path, destination: &Path, options: CollectOptions) -> RunRequest {
    RunRequest {
        source_root: Some(source.to_path_buf()),
        destination_root: Some(destination.to_path_buf()),
        options,
    }
}

fn ordering_options() -> CollectOptions {
    CollectOptions {
        mode: CollectionMode::Primary,
        manifest: Some(ManifestOptions::default()),
    }
}

#[test]
fn test_collect_without_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    let destination = TempDir::new().unwrap();

    let mut events: Vec<ProgressEvent> = Vec::new();
    let outcome = run(
        &request(&source, destination.path(), CollectOptions::default()),
        |event| events.push(event.clone()),
    )
    .unwrap();

    let expected_folder = destination.path().join("2_files_Jobs");
    assert_eq!(
        outcome,
        RunOutcome::Completed {
            destination: expected_folder.clone(),
            file_count: 2,
        }
    );
    assert_eq!(sorted_file_names(&expected_folder), vec!["A_x.pdf", "B_y.pdf"]);
    assert_eq!(
        fs::read_to_string(expected_folder.join("B_y.pdf")).unwrap(),
        "%PDF-1.4 B/Completed/y.pdf"
    );

    let names: Vec<_> = events.iter().map(|e| e.target_name.as_str()).collect();
    assert_eq!(names, vec!["A_x.pdf", "B_y.pdf"]);
}

#[test]
fn test_manifest_order_is_not_applied() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    fs::write(source.join("addresses.csv"), "Address,File Name\n2 Oak,y.pdf\n1 Main,x.pdf\n")
        .unwrap();

    let batch = prepare_batch(&source, &ordering_options()).unwrap();
    let names: Vec<_> = batch.iter().map(|f| f.target_name.as_str()).collect();
    assert_eq!(names, vec!["A_x.pdf", "B_y.pdf"]);
}

#[test]
fn test_manifest_filters_unlisted_files() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    create_pdf(&source, "C/complete/z.pdf");
    fs::write(source.join("addresses.csv"), "File Name\nz.pdf\n\nx.pdf\n").unwrap();
    let destination = TempDir::new().unwrap();

    let outcome = run(
        &request(&source, destination.path(), ordering_options()),
        |_| {},
    )
    .unwrap();

    let expected_folder = destination.path().join("2_files_Jobs");
    assert!(matches!(outcome, RunOutcome::Completed { file_count: 2, .. }));
    assert_eq!(sorted_file_names(&expected_folder), vec!["A_x.pdf", "C_z.pdf"]);
}

#[test]
fn test_missing_manifest_copies_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    let destination = TempDir::new().unwrap();

    let result = run(
        &request(&source, destination.path(), ordering_options()),
        |_| {},
    );

    assert!(matches!(result, Err(CollectError::ManifestMissing { .. })));
    assert!(sorted_file_names(destination.path()).is_empty());
}

#[test]
fn test_manifest_without_column_fails() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    fs::write(source.join("addresses.csv"), "Address\n1 Main\n").unwrap();

    let result = prepare_batch(&source, &ordering_options());
    assert!(matches!(result, Err(CollectError::ManifestFormat { .. })));
}

#[test]
fn test_no_matching_folders_creates_no_destination() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("Jobs");
    create_pdf(&source, "A/Drafts/x.pdf");
    create_pdf(&source, "B/Incomplete/y.pdf");
    let destination = TempDir::new().unwrap();

    let batch = prepare_batch(&source, &CollectOptions::default()).unwrap();
    assert!(batch.is_empty());

    let outcome = copy_batch(&batch, &source, destination.path(), |_| {}).unwrap();
    assert_eq!(outcome, RunOutcome::NoMatchesFound);
    assert!(sorted_file_names(destination.path()).is_empty());
}

#[test]
fn test_identical_basenames_are_disambiguated() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("Jobs");
    create_pdf(&source, "A/Complete/doc.pdf");
    create_pdf(&source, "B/Complete/doc.pdf");
    let destination = TempDir::new().unwrap();

    run(
        &request(&source, destination.path(), CollectOptions::default()),
        |_| {},
    )
    .unwrap();

    let folder = destination.path().join("2_files_Jobs");
    assert_eq!(sorted_file_names(&folder), vec!["A_doc.pdf", "B_doc.pdf"]);
    assert_eq!(
        fs::read_to_string(folder.join("A_doc.pdf")).unwrap(),
        "%PDF-1.4 A/Complete/doc.pdf"
    );
}

#[test]
fn test_every_pdf_copied_once_and_count_matches_folder_name() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("Batch 7");
    let placed = [
        ("Alpha", "Complete", "1.pdf"),
        ("Alpha", "Completed", "2.PDF"),
        ("Beta", "complete ", "3.pdf"),
        ("Gamma", "completed-final", "4.pdf"),
    ];
    for (subfolder, folder, file) in placed {
        create_pdf(&source, &format!("{subfolder}/{folder}/{file}"));
    }
    create_pdf(&source, "Alpha/Complete/nested/deep.pdf");
    fs::write(source.join("Beta/complete /readme.txt"), "text").unwrap();
    let destination = TempDir::new().unwrap();

    let outcome = run(
        &request(&source, destination.path(), CollectOptions::default()),
        |_| {},
    )
    .unwrap();

    let RunOutcome::Completed {
        destination: folder,
        file_count,
    } = outcome
    else {
        panic!("預期複製完成");
    };

    let folder_name = folder.file_name().unwrap().to_string_lossy().to_string();
    let prefix: usize = folder_name.split('_').next().unwrap().parse().unwrap();
    let copied = sorted_file_names(&folder);

    assert_eq!(folder_name, "4_files_Batch 7");
    assert_eq!(prefix, copied.len());
    assert_eq!(file_count, copied.len());

    let mut expected: Vec<String> = placed
        .iter()
        .map(|(subfolder, _, file)| format!("{subfolder}_{file}"))
        .collect();
    expected.sort();
    assert_eq!(copied, expected);
}

#[test]
fn test_collect_twice_yields_identical_mapping() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    create_pdf(&source, "A/Completed/w.pdf");

    assert_eq!(collect(&source).unwrap(), collect(&source).unwrap());
}

#[test]
fn test_legacy_mode_copies_original_names() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    create_pdf(&source, "C/archive/Old Complete/z.pdf");
    let destination = TempDir::new().unwrap();

    let options = CollectOptions {
        mode: CollectionMode::Legacy,
        manifest: None,
    };
    run(&request(&source, destination.path(), options), |_| {}).unwrap();

    let folder = destination.path().join("3_files_Jobs");
    assert_eq!(sorted_file_names(&folder), vec!["x.pdf", "y.pdf", "z.pdf"]);
}

#[test]
fn test_invalid_destination_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let source = jobs_tree(&temp_dir);
    let missing = temp_dir.path().join("missing");

    let result = run(
        &request(&source, &missing, CollectOptions::default()),
        |_| {},
    );
    assert!(matches!(result, Err(CollectError::InvalidDirectory { .. })));
    assert!(!missing.exists());
}
