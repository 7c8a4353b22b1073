use crate::core::config::data::Config;
use crate::core::config::defaults::ConfigKey;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        for line in self.describe() {
            println!("  {line}");
        }
    }

    pub(crate) fn describe(&self) -> Vec<String> {
        ConfigKey::ALL
            .iter()
            .map(|key| match self.get(*key) {
                Some(value) => format!("{key}: {}", single_line(value)),
                None => format!("{key}: (unset)"),
            })
            .collect()
    }
}

fn single_line(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > 60 {
        let head: String = collapsed.chars().take(57).collect();
        format!("{head}...")
    } else {
        collapsed
    }
}
