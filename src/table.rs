use std::fmt::Display;

pub struct Table<T: Display> {
    // Matrix of rows, made of vectors of type T
    // T must be printable (Display trait)
    rows: Vec<Vec<T>>,

    // Minimum space between columns
    padding: usize,
}

impl<T: Display> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            padding: 2,
        }
    }

    pub fn add_row<R: Into<Vec<T>>>(&mut self, row: R) {
        let row: Vec<T> = row.into();

        if row.is_empty() {
            return;
        }

        self.rows.push(row);
    }
}

impl<T: Display> Display for Table<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();

        let columns = cells.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut widths = vec![0; columns];

        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        for row in &cells {
            let last = row.len().saturating_sub(1);

            for (i, cell) in row.iter().enumerate() {
                // No trailing padding after the last column
                if i == last {
                    write!(f, "{}", cell)?;
                } else {
                    write!(
                        f,
                        "{:<width$}{:<padding$}",
                        cell,
                        "",
                        width = widths[i],
                        padding = self.padding
                    )?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
