//! Test helper module for CLI tests
//!
//! Provides `TestFixture`: a folder of documents plus a private config
//! directory, so runs never touch the real per-user config.

#![allow(dead_code)] // Test helpers may not be used in all test modules
#![allow(deprecated)] // cargo_bin() deprecation

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::PathBuf;

pub struct TestFixture {
    pub docs: TempDir,
    pub config: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            docs: TempDir::new().unwrap(),
            config: TempDir::new().unwrap(),
        }
    }

    pub fn docs_path(&self) -> PathBuf {
        self.docs.path().to_path_buf()
    }

    pub fn config_file(&self) -> PathBuf {
        self.config.path().join("config.txt")
    }

    /// Add a file with text content
    pub fn add_file(&self, name: &str, content: &str) -> &Self {
        self.docs.child(name).write_str(content).unwrap();
        self
    }

    /// Add a real PDF, one entry of `pages` per page, one string per line.
    pub fn add_pdf(&self, name: &str, pages: &[&[&str]]) -> &Self {
        self.docs.child(name).write_binary(&build_pdf(pages)).unwrap();
        self
    }

    /// Command for `deepindex` with the fixture's config directory.
    pub fn deepindex(&self) -> Command {
        let mut cmd = Command::cargo_bin("deepindex").unwrap();
        cmd.env("DEEPINDEX_CONFIG_DIR", self.config.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// `deepindex search <docs> -k <keyword> --backend lopdf`
    pub fn search(&self, keyword: &str) -> Command {
        let mut cmd = self.deepindex();
        cmd.arg("search")
            .arg(self.docs.path())
            .args(["--keyword", keyword, "--backend", "lopdf"]);
        cmd
    }
}

fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 11.into()]),
            Operation::new("TL", vec![14.into()]),
            Operation::new("Td", vec![72.into(), 760.into()]),
        ];
        for line in lines.iter() {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
