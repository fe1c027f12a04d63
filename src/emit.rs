/* fft-tables | emit.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Text renderings of a generated table set */

/******************************************************************************/

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::bitrev::Convention;
use crate::error::{Error, Result};
use crate::size::TransformSize;
use crate::TableSet;

/******************************************************************************/

/// Floating point width of the emitted sine samples
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Precision {
    #[default]
    F32,
    F64,
}

impl Precision {
    pub fn type_name(self) -> &'static str {
        match self {
            Precision::F32 => "f32",
            Precision::F64 => "f64",
        }
    }
}

/// Integer type of the emitted bit reversal entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum IndexType {
    U8,
    #[default]
    U16,
    U32,
}

impl IndexType {
    pub fn type_name(self) -> &'static str {
        match self {
            IndexType::U8 => "u8",
            IndexType::U16 => "u16",
            IndexType::U32 => "u32",
        }
    }

    /// Largest index the type can hold
    pub fn max_index(self) -> u64 {
        match self {
            IndexType::U8 => u8::MAX.into(),
            IndexType::U16 => u16::MAX.into(),
            IndexType::U32 => u32::MAX.into(),
        }
    }

    /// Checks that every index of a table of `max_size` entries fits in the type
    ///
    /// Cheap enough to run before generating anything.
    pub fn check(self, max_size: usize) -> Result<()> {
        if max_size.saturating_sub(1) as u64 > self.max_index() {
            return Err(Error::IndexOverflow { size: max_size, index_type: self.type_name() });
        }
        Ok(())
    }
}

/******************************************************************************/

/// Renders a table set
///
/// Rendering happens in memory: nothing is written unless the whole set could be rendered.
pub trait Emitter {
    fn render(&self, tables: &TableSet) -> Result<Vec<u8>>;

    fn emit(&self, tables: &TableSet, out: &mut dyn Write) -> Result<()> {
        let text = self.render(tables)?;
        out.write_all(&text)?;
        out.flush()?;
        debug!(bytes = text.len(), "tables emitted");
        Ok(())
    }
}

/******************************************************************************/

/// Rust module with `cfg`-guarded constants
///
/// Exactly one `SINE` table is compiled in, picked by the `size-N` feature of the consumer.
/// All bit reversal tables go into `BITREV`, indexed by size class, behind the
/// `bitrev-tables` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter {
    pub precision: Precision,
    pub index_type: IndexType,
}

impl RustEmitter {
    fn header(&self, f: &mut Vec<u8>, tables: &TableSet) -> Result<()> {
        writeln!(f, "//! This file was generated with fft-tables {}.", env!("CARGO_PKG_VERSION"))?;
        writeln!(f, "//!")?;
        writeln!(f, "//! Maximum transform size: {}.", tables.max_size)?;
        if tables.bitrev.is_some() {
            let convention = match tables.convention {
                Convention::SwapPairs => "each entry is max(i, reverse_bits(i))",
                Convention::Full => "each entry is reverse_bits(i)",
            };
            writeln!(f, "//! Bit reversal tables: {convention}.")?;
        }
        writeln!(f)?;
        writeln!(f, "#![allow(clippy::excessive_precision)]")?;
        writeln!(f, "#![allow(clippy::unreadable_literal)]")?;
        writeln!(f)?;
        Ok(())
    }

    fn sine(&self, f: &mut Vec<u8>, tables: &TableSet) -> Result<()> {
        let ty = self.precision.type_name();
        writeln!(f, "cfg_if::cfg_if! {{")?;
        for (i, table) in tables.twiddle.iter().enumerate() {
            let kw = if i == 0 { "if" } else { "} else if" };
            writeln!(f, "    {kw} #[cfg(feature = \"{}\")] {{", table.size().selector())?;
            writeln!(f, "        pub(crate) const SINE: &[{ty}] = &[")?;
            // Double precision literals, the compiler rounds them down to f32 if needed
            for x in table.sine() {
                writeln!(f, "            {x:?},")?;
            }
            writeln!(f, "        ];")?;
        }
        if !tables.twiddle.is_empty() {
            writeln!(f, "    }}")?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;
        Ok(())
    }

    fn bitrev(&self, f: &mut Vec<u8>, tables: &TableSet) -> Result<()> {
        let Some(bitrev) = &tables.bitrev else {
            return Ok(());
        };
        writeln!(f, "#[cfg(feature = \"bitrev-tables\")]")?;
        writeln!(f, "pub(crate) const BITREV: &[&[{}]] = &[", self.index_type.type_name())?;
        for table in bitrev.iter() {
            writeln!(f, "    &[")?;
            for entry in table.entries() {
                writeln!(f, "        {entry},")?;
            }
            writeln!(f, "    ],")?;
        }
        writeln!(f, "];")?;
        writeln!(f)?;
        Ok(())
    }
}

impl Emitter for RustEmitter {
    fn render(&self, tables: &TableSet) -> Result<Vec<u8>> {
        if tables.bitrev.is_some() {
            self.index_type.check(tables.max_size.get())?;
        }
        let mut f = Vec::new();
        self.header(&mut f, tables)?;
        self.sine(&mut f, tables)?;
        self.bitrev(&mut f, tables)?;
        Ok(f)
    }
}

/******************************************************************************/

/// JSON document holding the same data as [`RustEmitter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter {
    pub precision: Precision,
    pub pretty: bool,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    max_size: TransformSize,
    precision: &'static str,
    twiddle: Vec<JsonTwiddle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitrev: Option<JsonBitrev<'a>>,
}

#[derive(Serialize)]
struct JsonTwiddle {
    size: TransformSize,
    selector: String,
    sine: SineValues,
}

#[derive(Serialize)]
#[serde(untagged)]
enum SineValues {
    F32(Vec<f32>),
    F64(Vec<f64>),
}

#[derive(Serialize)]
struct JsonBitrev<'a> {
    convention: Convention,
    tables: Vec<&'a [usize]>,
}

impl Emitter for JsonEmitter {
    fn render(&self, tables: &TableSet) -> Result<Vec<u8>> {
        let twiddle = tables
            .twiddle
            .iter()
            .map(|t| JsonTwiddle {
                size: t.size(),
                selector: t.size().selector(),
                sine: match self.precision {
                    Precision::F32 => SineValues::F32(t.sine_f32()),
                    Precision::F64 => SineValues::F64(t.sine().to_vec()),
                },
            })
            .collect();
        let bitrev = tables.bitrev.as_ref().map(|set| JsonBitrev {
            convention: tables.convention,
            tables: set.iter().map(|t| t.entries()).collect(),
        });
        let doc = JsonDocument {
            max_size: tables.max_size,
            precision: self.precision.type_name(),
            twiddle,
            bitrev,
        };

        let mut f = if self.pretty {
            serde_json::to_vec_pretty(&doc)?
        } else {
            serde_json::to_vec(&doc)?
        };
        f.push(b'\n');
        Ok(f)
    }
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, GenConfig};

    fn render_rust(config: &GenConfig, emitter: RustEmitter) -> String {
        let tables = generate(config).unwrap();
        String::from_utf8(emitter.render(&tables).unwrap()).unwrap()
    }

    #[test]
    fn test_rust_selector_chain() {
        let text = render_rust(&GenConfig::new(64), RustEmitter::default());
        let arms: Vec<_> = text.lines().filter(|l| l.contains("#[cfg(feature = \"size-")).collect();
        assert_eq!(arms.len(), 5);
        assert!(arms[0].trim_start().starts_with("if #[cfg(feature = \"size-64\")]"));
        assert!(arms[4].trim_start().starts_with("} else if #[cfg(feature = \"size-4\")]"));
        assert_eq!(text.matches("pub(crate) const SINE: &[f32]").count(), 5);
        assert!(text.contains("-0.70710678"));
        assert!(text.contains("#![allow(clippy::excessive_precision)]"));
    }

    #[test]
    fn test_rust_bitrev() {
        let text = render_rust(&GenConfig::new(8), RustEmitter::default());
        let gate = "#[cfg(feature = \"bitrev-tables\")]\npub(crate) const BITREV: &[&[u16]] = &[";
        assert!(text.contains(gate));
        let start = text.find("const BITREV").unwrap();
        let entries: Vec<usize> = text[start..]
            .lines()
            .filter_map(|l| l.trim().trim_end_matches(',').parse().ok())
            .collect();
        assert_eq!(entries, [0, 0, 1, 0, 2, 2, 3, 0, 4, 2, 6, 4, 5, 6, 7]);
    }

    #[test]
    fn test_rust_bitrev_disabled() {
        let text = render_rust(&GenConfig::new(8).without_bitrev(), RustEmitter::default());
        assert!(!text.contains("BITREV"));
        assert!(!text.contains("Bit reversal tables"));
    }

    #[test]
    fn test_rust_f64() {
        let emitter = RustEmitter { precision: Precision::F64, ..Default::default() };
        let text = render_rust(&GenConfig::new(16), emitter);
        assert!(text.contains("pub(crate) const SINE: &[f64]"));
    }

    #[test]
    fn test_index_overflow() {
        let tables = generate(&GenConfig::new(512)).unwrap();
        let emitter = RustEmitter { index_type: IndexType::U8, ..Default::default() };
        assert!(matches!(
            emitter.render(&tables),
            Err(Error::IndexOverflow { size: 512, index_type: "u8" })
        ));

        let tables = generate(&GenConfig::new(256)).unwrap();
        assert!(emitter.render(&tables).is_ok());

        let tables = generate(&GenConfig::new(512).without_bitrev()).unwrap();
        assert!(emitter.render(&tables).is_ok());
    }

    #[test]
    fn test_index_check_without_tables() {
        assert!(IndexType::U16.check(1 << 16).is_ok());
        assert!(matches!(
            IndexType::U16.check(1 << 17),
            Err(Error::IndexOverflow { size: 131072, index_type: "u16" })
        ));
        assert!(IndexType::U8.check(256).is_ok());
        assert!(IndexType::U8.check(512).is_err());
        assert!(IndexType::U8.check(0).is_ok());
    }

    #[test]
    fn test_json() {
        let tables = generate(&GenConfig::new(8)).unwrap();
        let text = JsonEmitter::default().render(&tables).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&text).unwrap();
        assert_eq!(doc["max_size"], 8);
        assert_eq!(doc["precision"], "f32");
        assert_eq!(doc["twiddle"][0]["selector"], "size-8");
        assert_eq!(doc["twiddle"][1]["sine"].as_array().unwrap().len(), 0);
        assert_eq!(doc["bitrev"]["convention"], "swap-pairs");
        assert_eq!(doc["bitrev"]["tables"][3], serde_json::json!([0, 4, 2, 6, 4, 5, 6, 7]));
    }

    #[test]
    fn test_emit_writes_everything() {
        let tables = generate(&GenConfig::new(32)).unwrap();
        let emitter = RustEmitter::default();
        let mut out = Vec::new();
        emitter.emit(&tables, &mut out).unwrap();
        assert_eq!(out, emitter.render(&tables).unwrap());
    }
}
