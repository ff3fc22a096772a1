use std::fmt;

use crate::progress::{ProgressTracker, Section};

pub struct ProgressView<'a>(pub &'a ProgressTracker);

impl fmt::Display for ProgressView<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let tracker = self.0;

        writeln!(
            f,
            "{}/{} explored, {}% complete (gullak: {})",
            tracker.visited_sections().len(),
            Section::ALL.len(),
            tracker.rounded_percent(),
            tracker.fill_level().as_str()
        )?;
        for section in Section::ALL {
            let mark = if tracker.visited_sections().contains(&section) {
                'x'
            } else {
                ' '
            };
            writeln!(f, "  [{mark}] {section}")?;
        }

        if !tracker.achievements().is_empty() {
            writeln!(f, "Achievements:")?;
            for achievement in tracker.achievements() {
                writeln!(f, "  * {}: {}", achievement.title(), achievement.description())?;
            }
        }
        Ok(())
    }
}
