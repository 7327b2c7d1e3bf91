use std::io::{self, Write};

use crate::config::Config;

/// The `DO NOT EDIT` marker line, without a line ending.
pub fn banner(generated_by: &str) -> String {
    format!("// Code generated by {generated_by}. DO NOT EDIT.")
}

/// Write the file preamble: build constraint, license, banner, then package
/// doc and declaration. Empty fields are skipped; the banner is always written.
pub fn write_header<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    if !config.build_tag.is_empty() {
        writeln!(out, "// +build {}", config.build_tag)?;
        writeln!(out)?;
    }

    if !config.license.is_empty() {
        writeln!(out, "{}", config.license)?;
    }

    writeln!(out, "{}", banner(&config.generated_by))?;
    writeln!(out)?;

    if !config.package_name.is_empty() {
        if !config.package_doc.is_empty() {
            writeln!(
                out,
                "// Package {} {}",
                config.package_name, config.package_doc
            )?;
        }
        writeln!(out, "package {}", config.package_name)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenOption;

    fn header(options: Vec<GenOption>) -> String {
        let config = Config::build(options).unwrap();
        let mut buf = Vec::new();
        write_header(&mut buf, &config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn banner_only_by_default() {
        assert_eq!(
            header(vec![]),
            "// Code generated by default. DO NOT EDIT.\n\n"
        );
    }

    #[test]
    fn every_element_in_order() {
        let out = header(vec![
            GenOption::build_tag("amd64"),
            GenOption::license("// Copyright ACME"),
            GenOption::generated_by("stampgen"),
            GenOption::package_with_doc("demo", "does things."),
        ]);
        assert_eq!(
            out,
            "// +build amd64\n\
             \n\
             // Copyright ACME\n\
             // Code generated by stampgen. DO NOT EDIT.\n\
             \n\
             // Package demo does things.\n\
             package demo\n\
             \n"
        );
    }

    #[test]
    fn package_without_doc_has_no_comment() {
        let out = header(vec![GenOption::package("demo")]);
        assert_eq!(
            out,
            "// Code generated by default. DO NOT EDIT.\n\npackage demo\n\n"
        );
    }

    #[test]
    fn doc_without_package_is_not_written() {
        let mut config = Config::default();
        config.package_doc = "orphan".into();
        let mut buf = Vec::new();
        write_header(&mut buf, &config).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(!out.contains("orphan"));
        assert!(!out.contains("package"));
    }

    #[test]
    fn write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("broken pipe"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let config = Config::default();
        assert!(write_header(&mut Broken, &config).is_err());
    }
}
