//! Bot-style replies: a title, an optional description and image, and
//! side-by-side fields. Rendered as plain text for the terminal.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub fields: Vec<ReplyField>,
}

impl Reply {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Error reply, prefixed with the `:bangbang:` marker.
    pub fn error(message: &str) -> Self {
        Self::new("Error").description(format!(":bangbang: {message}"))
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(ReplyField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn is_error(&self) -> bool {
        self.title == "Error"
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
        }
        if let Some(url) = &self.image_url {
            writeln!(f, "[image] {url}")?;
        }

        let mut i = 0;
        while i < self.fields.len() {
            // consecutive inline fields are rendered as columns
            let run = self.fields[i..]
                .iter()
                .take_while(|field| field.inline)
                .count()
                .max(1);
            write_columns(f, &self.fields[i..i + run])?;
            i += run;
        }
        Ok(())
    }
}

fn write_columns(f: &mut fmt::Formatter<'_>, fields: &[ReplyField]) -> fmt::Result {
    let columns: Vec<Vec<&str>> = fields
        .iter()
        .map(|field| {
            std::iter::once(field.name.as_str())
                .chain(field.value.lines())
                .collect()
        })
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|col| col.iter().map(|s| s.chars().count()).max().unwrap_or(0))
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..rows {
        let mut line = String::new();
        for (col, width) in columns.iter().zip(&widths) {
            let cell = col.get(row).copied().unwrap_or("");
            line.push_str(&format!("{cell:<width$}  "));
        }
        writeln!(f, "{}", line.trim_end())?;
    }
    Ok(())
}
