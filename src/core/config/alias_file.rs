use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};

use super::aliases::{Alias, AliasTable};

/// Plain-text alias file: one `<name> <target>` pair per line.
///
/// Reading is token based, so a target containing whitespace does not
/// survive a save/load cycle intact.
pub struct AliasFile {
    file_path: PathBuf,
}

impl AliasFile {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Creates or truncates the file and writes every entry in table order.
    pub fn save(&self, table: &AliasTable) -> io::Result<usize> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        let written = write_aliases(&mut writer, table)?;
        writer.flush()?;
        log::debug!(
            "Saved {} aliases to {}",
            written,
            self.file_path.display()
        );
        Ok(written)
    }

    /// Appends the file's pairs to `table`, silently dropping whatever does
    /// not fit. Returns the number of pairs accepted.
    pub fn load_into(&self, table: &mut AliasTable) -> io::Result<usize> {
        let mut contents = String::new();
        File::open(&self.file_path)?.read_to_string(&mut contents)?;

        let pairs = parse_aliases(&contents);
        let offered = pairs.len();
        let accepted = table.extend_lenient(pairs);
        if accepted < offered {
            log::warn!(
                "Dropped {} aliases from {}: table is full",
                offered - accepted,
                self.file_path.display()
            );
        }
        log::debug!(
            "Loaded {} aliases from {}",
            accepted,
            self.file_path.display()
        );
        Ok(accepted)
    }
}

pub fn write_aliases<W: Write>(writer: &mut W, table: &AliasTable) -> io::Result<usize> {
    for alias in table.list() {
        writeln!(writer, "{} {}", alias.name, alias.target)?;
    }
    Ok(table.len())
}

/// Pairs whitespace-separated tokens regardless of line breaks. A trailing
/// unpaired token is ignored.
pub fn parse_aliases(contents: &str) -> Vec<Alias> {
    let mut tokens = contents.split_ascii_whitespace();
    let mut pairs = Vec::new();
    while let (Some(name), Some(target)) = (tokens.next(), tokens.next()) {
        pairs.push(Alias::new(name, target));
    }
    pairs
}
