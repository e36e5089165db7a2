//! Expression table model and text rendering.

use std::fmt;

/// Unit tag prefixed to an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Inches, `[Inch]`.
    Inch,
    /// Pounds mass, `[lbm]`.
    PoundMass,
}

impl Unit {
    /// The tag as written in the file.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Inch => "[Inch]",
            Self::PoundMass => "[lbm]",
        }
    }
}

/// Right-hand side of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A real number written with a fixed number of decimals.
    Number {
        /// The value.
        value: f64,
        /// Decimal places.
        precision: usize,
    },
    /// A count.
    Count(usize),
    /// A boolean written as `1` or `0`.
    Flag(bool),
    /// A quoted string.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, precision } => {
                // -0.0 + 0.0 is +0.0
                let value = *value + 0.0;
                write!(f, "{value:.precision$}")
            }
            Self::Count(n) => write!(f, "{n}"),
            Self::Flag(b) => f.write_str(if *b { "1" } else { "0" }),
            Self::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

/// One named expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Expression name.
    pub name: String,
    /// Unit tag, if any.
    pub unit: Option<Unit>,
    /// Value.
    pub value: Value,
    /// Trailing comment.
    pub note: Option<String>,
}

impl Expression {
    /// A length in inches with `precision` decimals.
    #[must_use]
    pub fn inch(name: impl Into<String>, value: f64, precision: usize) -> Self {
        Self {
            name: name.into(),
            unit: Some(Unit::Inch),
            value: Value::Number { value, precision },
            note: None,
        }
    }

    /// A weight in pounds mass.
    #[must_use]
    pub fn pound_mass(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            unit: Some(Unit::PoundMass),
            value: Value::Number {
                value,
                precision: 3,
            },
            note: None,
        }
    }

    /// A unitless count.
    #[must_use]
    pub fn count(name: impl Into<String>, count: usize) -> Self {
        Self::unitless(name, Value::Count(count))
    }

    /// A unitless 0/1 flag.
    #[must_use]
    pub fn flag(name: impl Into<String>, flag: bool) -> Self {
        Self::unitless(name, Value::Flag(flag))
    }

    /// A quoted string.
    #[must_use]
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::unitless(name, Value::Text(text.into()))
    }

    fn unitless(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            unit: None,
            value,
            note: None,
        }
    }

    /// Attach a trailing comment.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(unit) = self.unit {
            f.write_str(unit.tag())?;
        }
        write!(f, "{} = {}", self.name, self.value)?;
        if let Some(note) = &self.note {
            write!(f, " // {note}")?;
        }
        Ok(())
    }
}

/// A line inside a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A `//` comment line.
    Comment(String),
    /// An expression.
    Expression(Expression),
    /// An empty line.
    Blank,
}

/// A titled group of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section title, written as `// --- TITLE ---`.
    pub title: String,
    /// Entries in output order.
    pub entries: Vec<Entry>,
}

impl Section {
    /// An empty section.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Append an expression.
    pub fn push(&mut self, expression: Expression) {
        self.entries.push(Entry::Expression(expression));
    }

    /// Append a comment line.
    pub fn comment(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Comment(text.into()));
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.entries.push(Entry::Blank);
    }

    /// Expressions in this section.
    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.entries.iter().filter_map(|e| match e {
            Entry::Expression(x) => Some(x),
            Entry::Comment(_) | Entry::Blank => None,
        })
    }
}

/// A complete expression file.
///
/// Rendering is deterministic: the same table always renders to the same text.
///
/// # Example
///
/// ```
/// use autocrate_expressions::{Expression, ExpressionTable, Section};
///
/// let mut section = Section::new("SKID PARAMETERS");
/// section.push(Expression::inch("Skid_Actual_Height", 3.5, 3));
/// section.push(Expression::count("CALC_Skid_Count", 3));
///
/// let mut table = ExpressionTable::new();
/// table.sections.push(section);
///
/// let text = table.render();
/// assert!(text.contains("// --- SKID PARAMETERS ---"));
/// assert!(text.contains("[Inch]Skid_Actual_Height = 3.500"));
/// assert!(text.contains("CALC_Skid_Count = 3"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpressionTable {
    /// Comment lines written before the first section.
    pub header: Vec<String>,
    /// Sections in output order.
    pub sections: Vec<Section>,
    /// Floorboards left out because the slot table was full.
    pub dropped_floorboards: usize,
}

impl ExpressionTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every expression, in output order.
    pub fn expressions(&self) -> impl Iterator<Item = &Expression> {
        self.sections.iter().flat_map(Section::expressions)
    }

    /// Look an expression up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Expression> {
        self.expressions().find(|e| e.name == name)
    }

    /// Number of expressions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expressions().count()
    }

    /// Returns `true` if the table has no expressions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the table as expression file text.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExpressionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.header {
            writeln!(f, "// {line}")?;
        }
        if !self.header.is_empty() {
            writeln!(f)?;
        }
        for section in &self.sections {
            writeln!(f, "// --- {} ---", section.title)?;
            for entry in &section.entries {
                match entry {
                    Entry::Comment(text) => writeln!(f, "// {text}")?,
                    Entry::Expression(e) => writeln!(f, "{e}")?,
                    Entry::Blank => writeln!(f)?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "// End of Expressions")
    }
}
