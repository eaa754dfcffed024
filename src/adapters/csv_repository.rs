//! CSV implementation of the value-table repository.
//!
//! Each agent's table lives in `Qtable_<name>.csv`: a `board` column with the
//! canonical key followed by one `mv_<row>_<col>` column per cell.

use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufReader, ErrorKind},
    iter,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::{
    Error, Result,
    ports::TableRepository,
    q_learning::ValueTable,
    types::CanonicalKey,
};

const KEY_COLUMN: &str = "board";

/// CSV-file-based value-table repository.
///
/// Writes go to a temporary file in the target directory which then
/// atomically replaces the previous table, so a failed write never leaves a
/// truncated file behind.
///
/// # Examples
///
/// ```no_run
/// use gomoku_agents::adapters::CsvTableRepository;
/// use gomoku_agents::ports::TableRepository;
///
/// let repo = CsvTableRepository::new("tables");
/// let table = repo.load("alice", 9)?;
/// repo.save("alice", &table)?;
/// # Ok::<(), gomoku_agents::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvTableRepository {
    dir: PathBuf,
}

impl CsvTableRepository {
    /// Repository storing tables in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the table for `name`.
    pub fn table_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("Qtable_{name}.csv"))
    }
}

impl Default for CsvTableRepository {
    fn default() -> Self {
        Self::new(".")
    }
}

fn board_side(cells: usize) -> Result<usize> {
    let side = cells.isqrt();
    if side == 0 || side * side != cells {
        return Err(Error::InvalidBoardSize {
            size: cells,
            reason: "cell count is not a square".to_string(),
        });
    }
    Ok(side)
}

fn column_name(index: usize, side: usize) -> String {
    format!("mv_{}_{}", index / side, index % side)
}

fn parse_column(header: &str, side: usize) -> Option<usize> {
    let (row, col) = header.strip_prefix("mv_")?.split_once('_')?;
    let row: usize = row.parse().ok()?;
    let col: usize = col.parse().ok()?;
    (row < side && col < side).then_some(row * side + col)
}

impl TableRepository for CsvTableRepository {
    fn load(&self, name: &str, cells: usize) -> Result<ValueTable> {
        let side = board_side(cells)?;
        let path = self.table_path(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!("no value table at {path:?}, starting fresh");
                return Ok(ValueTable::new(cells));
            }
            Err(source) => {
                return Err(Error::Io {
                    operation: format!("open value table {path:?}"),
                    source,
                });
            }
        };

        let malformed = |line: u64, reason: String| Error::MalformedTable {
            path: path.clone(),
            line,
            reason,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        if headers.get(0) != Some(KEY_COLUMN) {
            return Err(malformed(
                1,
                format!("first column must be '{KEY_COLUMN}'"),
            ));
        }
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(headers.len().saturating_sub(1));
        for header in headers.iter().skip(1) {
            let index = parse_column(header, side).ok_or_else(|| {
                malformed(1, format!("unknown column '{header}' for a {side}x{side} board"))
            })?;
            if !seen.insert(index) {
                return Err(malformed(1, format!("duplicate column '{header}'")));
            }
            columns.push(index);
        }

        let mut table = ValueTable::new(cells);
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line());
            if record.len() > headers.len() {
                return Err(malformed(line, "more fields than columns".to_string()));
            }

            let state = CanonicalKey::parse(record.get(0).unwrap_or_default(), cells)
                .map_err(|e| malformed(line, e.to_string()))?;
            if table.contains(&state) {
                return Err(malformed(line, format!("duplicate state '{state}'")));
            }

            let mut values = vec![0.0; cells];
            for (field, &index) in record.iter().skip(1).zip(&columns) {
                let field = field.trim();
                if field.is_empty() {
                    continue;
                }
                let value: f64 = field
                    .parse()
                    .map_err(|_| malformed(line, format!("'{field}' is not a number")))?;
                if !value.is_finite() {
                    return Err(malformed(line, format!("non-finite value '{field}'")));
                }
                values[index] = value;
            }
            table.insert_row(state, values)?;
        }

        debug!("loaded {} states from {path:?}", table.len());
        Ok(table)
    }

    fn save(&self, name: &str, table: &ValueTable) -> Result<()> {
        let side = board_side(table.cells())?;
        let path = self.table_path(name);

        fs::create_dir_all(&self.dir).map_err(|source| Error::Io {
            operation: format!("create directory {:?}", self.dir),
            source,
        })?;
        let mut temp = NamedTempFile::new_in(&self.dir).map_err(|source| Error::Io {
            operation: format!("create temporary file in {:?}", self.dir),
            source,
        })?;

        {
            let mut writer = csv::Writer::from_writer(&mut temp);
            let header = iter::once(KEY_COLUMN.to_string())
                .chain((0..table.cells()).map(|index| column_name(index, side)));
            writer.write_record(header)?;
            for (state, values) in table.sorted_rows() {
                let record = iter::once(state.to_string())
                    .chain(values.iter().map(|value| value.to_string()));
                writer.write_record(record)?;
            }
            writer.flush().map_err(|source| Error::Io {
                operation: format!("write value table for {name}"),
                source,
            })?;
        }

        temp.as_file().sync_all().map_err(|source| Error::Io {
            operation: format!("sync value table for {name}"),
            source,
        })?;
        temp.persist(&path).map_err(|e| {
            warn!("could not replace {path:?}: {}", e.error);
            Error::Io {
                operation: format!("replace {path:?}"),
                source: e.error,
            }
        })?;

        debug!("saved {} states to {path:?}", table.len());
        Ok(())
    }
}
