use std::fmt;

use income_core::distribution::DATA_SOURCES;

pub struct SourcesView;

impl fmt::Display for SourcesView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for source in &DATA_SOURCES {
            writeln!(f, "{}", source.category)?;
            writeln!(f, "  {}", source.title)?;
            writeln!(f, "  Authors: {}", source.authors)?;
            writeln!(f, "  Organization: {}", source.organization)?;
            writeln!(f, "  Year: {}", source.published)?;
            writeln!(f, "  Key findings: {}", source.key_findings)?;
            writeln!(f, "  {}", source.url)?;
        }
        Ok(())
    }
}
