use moviehub_app::InitReport;

use crate::presentation::view_models::InitViewModel;

pub fn present_init(report: &InitReport) -> InitViewModel {
    InitViewModel {
        data_dir: report.data_dir.display().to_string(),
        config_path: report.config_path.display().to_string(),
        config_created: report.config_created,
        seeded_notices: report.seeded_notices,
        seeded_faqs: report.seeded_faqs,
        seeded_questions: report.seeded_questions,
    }
}
