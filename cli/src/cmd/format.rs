use folders::Folder;
use std::io::Write;

#[derive(Default)]
struct ColumnWidths {
    id: usize,
    name: usize,
    state: usize,
}

impl ColumnWidths {
    fn from_iter<'a>(iter: impl Iterator<Item = &'a FolderLine<'a>>) -> Self {
        iter.fold(Self::header(), |mut res, item| {
            res.id = res.id.max(item.id.len());
            res.name = res.name.max(item.name.len());
            res.state = res.state.max(item.state.len());
            res
        })
    }

    fn header() -> Self {
        Self {
            id: "ID".len(),
            name: "NAME".len(),
            state: "STATE".len(),
        }
    }
}

struct FolderLine<'a> {
    id: String,
    name: &'a str,
    state: &'static str,
}

impl<'a> From<&'a Folder> for FolderLine<'a> {
    fn from(folder: &'a Folder) -> Self {
        Self {
            id: folder.id.to_string(),
            name: folder.name.as_str(),
            state: if folder.deleted { "deleted" } else { "active" },
        }
    }
}

/// Writes folders either as an aligned table or as JSON
pub(crate) struct ListFormatter {
    pub json: bool,
}

impl ListFormatter {
    pub fn write_table<W: Write>(
        &self,
        output: &mut W,
        folders: &[Folder],
    ) -> std::io::Result<()> {
        let lines: Vec<FolderLine> = folders.iter().map(FolderLine::from).collect();
        let widths = ColumnWidths::from_iter(lines.iter());
        writeln!(
            output,
            "{:<iw$}  {:<nw$}  {:<sw$}",
            "ID",
            "NAME",
            "STATE",
            iw = widths.id,
            nw = widths.name,
            sw = widths.state,
        )?;
        for line in lines {
            writeln!(
                output,
                "{:<iw$}  {:<nw$}  {:<sw$}",
                line.id,
                line.name,
                line.state,
                iw = widths.id,
                nw = widths.name,
                sw = widths.state,
            )?;
        }
        Ok(())
    }

    /// Writes the folders and, when paginated, the token of the next page
    pub fn write<W: Write, T: serde::Serialize>(
        &self,
        output: &mut W,
        payload: &T,
        folders: &[Folder],
        token: Option<&str>,
    ) -> anyhow::Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *output, payload)?;
            writeln!(output)?;
        } else {
            self.write_table(output, folders)?;
            if let Some(token) = token {
                writeln!(output, "next token: {token}")?;
            }
        }
        Ok(())
    }
}
