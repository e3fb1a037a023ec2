pub mod mock_host;

use abc_radio::config::Config;
use abc_radio::skill::RadioSkill;
use abc_radio::stations::Catalogue;
use mock_host::MockHost;
use std::sync::Arc;

/// A skill over the built-in catalogue wired to a fresh mock host
pub fn skill_with(config: Config) -> (RadioSkill, Arc<MockHost>) {
    let host = Arc::new(MockHost::new());
    let skill = RadioSkill::new(host.clone(), Catalogue::builtin().clone(), config);
    (skill, host)
}
