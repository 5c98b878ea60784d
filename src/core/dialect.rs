use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One supported flavor of generated runner.
///
/// A dialect determines the file extension used both for candidate test
/// sources and for the generated runner file, plus the header directive the
/// runner opens with. All other template text is shared across dialects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize, Deserialize,
)]
pub enum Dialect {
    /// C sources (`.c`)
    #[value(name = "c")]
    #[serde(rename = "c")]
    C,
    /// C++ sources (`.cpp`)
    #[value(name = "cpp")]
    #[serde(rename = "cpp")]
    Cpp,
    /// Objective-C sources (`.m`)
    #[value(name = "m")]
    #[serde(rename = "m")]
    ObjC,
    /// Objective-C++ sources (`.mm`)
    #[value(name = "mm")]
    #[serde(rename = "mm")]
    ObjCpp,
}

impl Dialect {
    pub fn all() -> Vec<Dialect> {
        vec![Dialect::C, Dialect::Cpp, Dialect::ObjC, Dialect::ObjCpp]
    }

    /// Extension shared by candidate test sources and the runner file.
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::C => "c",
            Dialect::Cpp => "cpp",
            Dialect::ObjC => "m",
            Dialect::ObjCpp => "mm",
        }
    }

    /// Directive that pulls in the xtest framework header.
    ///
    /// The Objective-C family uses `#import`; everything else `#include`.
    pub fn header_directive(self) -> &'static str {
        match self {
            Dialect::C | Dialect::Cpp => "#include <fossil/xtest.h>",
            Dialect::ObjC | Dialect::ObjCpp => "#import <fossil/xtest.h>",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Dialect> {
        Dialect::all().into_iter().find(|d| d.extension() == ext)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
