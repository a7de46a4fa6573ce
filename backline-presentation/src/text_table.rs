use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: usize = 2;
const RULE: char = '-';

#[derive(Default)]
pub struct TextTableBuilder<'a, Seq> {
    title: Option<Cow<'a, str>>,
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]> + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<Cow<'a, str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.as_ref().iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(display_width(cell));
            }
        }
        let total_width = col_widths.iter().sum::<usize>() + COLUMN_GAP * (col_count - 1);

        let mut out = String::with_capacity((total_width + 1) * (self.rows.len() + 4));
        if let Some(title) = &self.title {
            let _ = writeln!(&mut out, "{title}");
        }
        self.write_line(&mut out, self.headers, &col_widths);
        let _ = writeln!(&mut out, "{}", RULE.to_string().repeat(total_width));
        for row in &self.rows {
            self.write_line(&mut out, row.as_ref(), &col_widths);
        }
        out
    }

    fn write_line(&self, out: &mut String, cells: &[Cow<'a, str>], col_widths: &[usize]) {
        let mut line = String::new();
        for (i, width) in col_widths.iter().copied().enumerate() {
            if i > 0 {
                line.push_str(&" ".repeat(COLUMN_GAP));
            }
            let cell = cells.get(i).map_or("", |cell| &**cell);
            let alignment = self.alignments.get(i).copied().unwrap_or_default();
            pad_cell(&mut line, cell, width, alignment);
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn pad_cell(line: &mut String, cell: &str, width: usize, alignment: Alignment) {
    let padding = width.saturating_sub(display_width(cell));
    let (left, right) = match alignment {
        Alignment::Left => (0, padding),
        Alignment::Center => (padding / 2, padding - padding / 2),
        Alignment::Right => (padding, 0),
    };
    line.push_str(&" ".repeat(left));
    line.push_str(cell);
    line.push_str(&" ".repeat(right));
}

/// Terminal columns taken by `text`, counting non-ASCII as double width.
fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}
