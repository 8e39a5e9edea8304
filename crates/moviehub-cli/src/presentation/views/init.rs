use std::fmt;

use crate::presentation::view_models::InitViewModel;

pub struct InitView<'a> {
    vm: &'a InitViewModel,
}

impl<'a> InitView<'a> {
    pub fn new(vm: &'a InitViewModel) -> Self {
        Self { vm }
    }
}

impl fmt::Display for InitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data directory: {}", self.vm.data_dir)?;

        if self.vm.config_created {
            writeln!(f, "✓ wrote default config.toml")?;
        } else {
            writeln!(f, "✓ config.toml already present")?;
        }

        let seeded =
            self.vm.seeded_notices + self.vm.seeded_faqs + self.vm.seeded_questions;
        if seeded > 0 {
            writeln!(
                f,
                "✓ seeded boards: {} notices, {} FAQ entries, {} questions",
                self.vm.seeded_notices, self.vm.seeded_faqs, self.vm.seeded_questions
            )?;
        } else {
            writeln!(f, "✓ boards already seeded")?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Next: set tmdb_api_key in {} to enable movie lookups",
            self.vm.config_path
        )?;
        Ok(())
    }
}
