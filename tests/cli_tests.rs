//! Command-line Tests
//!
//! Runs the `contig-origin` binary on small hit and taxonomy tables and checks
//! the files and reports it produces.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HITS: &str = "query_id,hit_id,e_val,query_length,alignment_length,start,end
k1_1,GCF_001,1.16e-28,535,535,1,535
k1_1,GCF_002,0,535,535,1,535
k1_2,GCF_001,0,1000,200,1,199
k1_2,GCF_001,0,1000,200,3,201
k1_2,GCF_001,0,1000,200,301,500
k1_2,GCF_001,0.05,1000,250,251,500
k1_2,GCF_002,0,1000,100,701,800
k1_2,GCF_001,0,1000,100,901,1000
k1_3,GCF_999,0,300,300,1,300
";

const TAXONOMY: &str = "kingdom,species,accession,taxid
Bacteria,Escherichia coli,GCF_001,562
Viruses,Escherichia phage T4,GCF_002,10665
";

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn contig_origin() -> Command {
    Command::cargo_bin("contig-origin").unwrap()
}

#[test]
fn test_classify_writes_derived_output() {
    let dir = TempDir::new().unwrap();
    let hits = write(dir.path(), "sample_parsed_blast.csv", HITS);
    let taxonomy = write(dir.path(), "taxonomy.csv", TAXONOMY);
    let outdir = dir.path().join("out");

    contig_origin()
        .arg("classify")
        .arg(&hits)
        .arg("--taxonomy")
        .arg(&taxonomy)
        .arg("--outdir")
        .arg(&outdir)
        .arg("--threads")
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contigs:            3"))
        .stdout(predicate::str::contains("sample_contig_taxonomy.csv"));

    let output = fs::read_to_string(outdir.join("sample_contig_taxonomy.csv")).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "query_id,hit_id,e_val,query_length,alignment_length,start,end,origin,kingdom,species,accession,taxid",
            "k1_1,GCF_002,0,535,535,1,535,single,Viruses,Escherichia phage T4,GCF_002,10665",
            "k1_2,GCF_001,0,1000,500,1,500,chimera,Bacteria,Escherichia coli,GCF_001,562",
            "k1_2,GCF_002,0,1000,100,701,800,chimera,Viruses,Escherichia phage T4,GCF_002,10665",
            "k1_2,GCF_001,0,1000,100,901,1000,chimera,Bacteria,Escherichia coli,GCF_001,562",
        ]
    );
}

#[test]
fn test_classify_json_summary() {
    let dir = TempDir::new().unwrap();
    let hits = write(dir.path(), "hits.csv", HITS);
    let taxonomy = write(dir.path(), "taxonomy.csv", TAXONOMY);
    let output = dir.path().join("nested").join("result.csv");

    contig_origin()
        .args(["--format", "json", "classify"])
        .arg(&hits)
        .arg("-t")
        .arg(&taxonomy)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chimera\": 1"))
        .stdout(predicate::str::contains("\"unmatched_rows\": 1"));

    assert!(output.exists());
}

#[test]
fn test_assign_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    let hits = write(dir.path(), "hits.csv", HITS);

    contig_origin()
        .args(["assign", "--format", "csv"])
        .arg(&hits)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "query_id,hit_id,e_val,query_length,alignment_length,start,end,origin\n",
        ))
        .stdout(predicate::str::contains("k1_3,GCF_999,0,300,300,1,300,single"));
}

#[test]
fn test_assign_text_report() {
    let dir = TempDir::new().unwrap();
    let hits = write(dir.path(), "hits.csv", HITS);

    contig_origin()
        .arg("assign")
        .arg(&hits)
        .assert()
        .success()
        .stdout(predicate::str::contains("k1_2 (1000 bp): chimera"))
        .stdout(predicate::str::contains("k1_1 (535 bp): single"));
}

#[test]
fn test_malformed_hit_table_reports_stage() {
    let dir = TempDir::new().unwrap();
    let hits = write(
        dir.path(),
        "hits.csv",
        "query_id,hit_id,e_val,query_length,alignment_length,start,end\nk1_1,GCF_001,0,535,535,600,10\n",
    );
    let taxonomy = write(dir.path(), "taxonomy.csv", TAXONOMY);

    contig_origin()
        .arg("classify")
        .arg(&hits)
        .arg("-t")
        .arg(&taxonomy)
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read hit table"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_taxonomy_without_taxid_reports_stage() {
    let dir = TempDir::new().unwrap();
    let hits = write(dir.path(), "hits.csv", HITS);
    let taxonomy = write(dir.path(), "taxonomy.csv", "accession,species\nGCF_001,E. coli\n");

    contig_origin()
        .arg("classify")
        .arg(&hits)
        .arg("-t")
        .arg(&taxonomy)
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load taxonomy table"));
}
