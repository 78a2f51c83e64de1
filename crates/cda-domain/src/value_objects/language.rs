//! Programming language identification
//!
//! Languages are detected from the uploaded file's extension. The set here
//! mirrors what the documentation prompts know how to handle; anything else
//! is rejected at upload time with a validation error.

use serde::{Deserialize, Serialize};

/// Programming language detected from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Python (.py)
    Python,
    /// JavaScript (.js, .jsx)
    JavaScript,
    /// TypeScript (.ts, .tsx)
    TypeScript,
    /// Java (.java)
    Java,
    /// C# (.cs)
    #[serde(rename = "C#")]
    CSharp,
    /// C++ (.cpp, .cc, .hpp)
    #[serde(rename = "C++")]
    Cpp,
    /// C (.c, .h)
    C,
    /// Go (.go)
    Go,
    /// Rust (.rs)
    Rust,
    /// Ruby (.rb)
    Ruby,
    /// PHP (.php)
    #[serde(rename = "PHP")]
    Php,
    /// Swift (.swift)
    Swift,
    /// Kotlin (.kt)
    Kotlin,
    /// Scala (.scala)
    Scala,
    /// Shell (.sh, .bash)
    Shell,
    /// SQL (.sql)
    #[serde(rename = "SQL")]
    Sql,
}

/// Extension-to-language mapping used for detection and upload validation
const EXTENSION_TABLE: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("js", Language::JavaScript),
    ("jsx", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("tsx", Language::TypeScript),
    ("java", Language::Java),
    ("cs", Language::CSharp),
    ("cpp", Language::Cpp),
    ("cc", Language::Cpp),
    ("hpp", Language::Cpp),
    ("c", Language::C),
    ("h", Language::C),
    ("go", Language::Go),
    ("rs", Language::Rust),
    ("rb", Language::Ruby),
    ("php", Language::Php),
    ("swift", Language::Swift),
    ("kt", Language::Kotlin),
    ("scala", Language::Scala),
    ("sh", Language::Shell),
    ("bash", Language::Shell),
    ("sql", Language::Sql),
];

impl Language {
    /// Detect the language for a filename, if its extension is supported
    ///
    /// # Example
    ///
    /// ```
    /// use cda_domain::value_objects::Language;
    ///
    /// assert_eq!(Language::from_filename("sample.py"), Some(Language::Python));
    /// assert_eq!(Language::from_filename("notes.txt"), None);
    /// ```
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.').map(|(_, ext)| ext)?;
        Self::from_extension(ext)
    }

    /// Detect the language for a bare extension (no leading dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        EXTENSION_TABLE
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, lang)| *lang)
    }

    /// Human-readable language name, as it appears in prompts and responses
    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Java => "Java",
            Self::CSharp => "C#",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::Go => "Go",
            Self::Rust => "Rust",
            Self::Ruby => "Ruby",
            Self::Php => "PHP",
            Self::Swift => "Swift",
            Self::Kotlin => "Kotlin",
            Self::Scala => "Scala",
            Self::Shell => "Shell",
            Self::Sql => "SQL",
        }
    }

    /// Documentation style conventionally used for this language
    pub fn doc_style(&self) -> &'static str {
        match self {
            Self::Python => "Google Style",
            Self::JavaScript => "JSDoc",
            Self::TypeScript => "TSDoc",
            Self::Java => "Javadoc",
            Self::CSharp => "XML Documentation",
            Self::Go => "GoDoc",
            Self::Rust => "Rustdoc",
            _ => "Standard",
        }
    }

    /// All supported file extensions, for validation error messages
    pub fn supported_extensions() -> Vec<&'static str> {
        EXTENSION_TABLE.iter().map(|(ext, _)| *ext).collect()
    }

    /// All supported language names, deduplicated, for the health endpoint
    pub fn supported_languages() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = EXTENSION_TABLE.iter().map(|(_, l)| l.name()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
