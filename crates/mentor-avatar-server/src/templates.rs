//! HTML pages rendered with minijinja

use minijinja::{context, Environment};

use mentor_avatar::GeneratedAvatar;

const INDEX_TEMPLATE: &str = "index.html";
const RESULT_TEMPLATE: &str = "result.html";

/// Compiled page templates
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(INDEX_TEMPLATE, include_str!("templates/index.html"))?;
        env.add_template(RESULT_TEMPLATE, include_str!("templates/result.html"))?;
        Ok(Self { env })
    }

    /// The input form
    pub fn index(&self) -> Result<String, minijinja::Error> {
        self.env.get_template(INDEX_TEMPLATE)?.render(context! {})
    }

    /// Previews, download links and traits for generated avatars
    pub fn result(&self, avatars: &[GeneratedAvatar]) -> Result<String, minijinja::Error> {
        self.env
            .get_template(RESULT_TEMPLATE)?
            .render(context! { avatars => avatars })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_avatar::{analyze_text, Profile, Role};

    #[test]
    fn test_index_has_both_blocks() {
        let html = Templates::new().unwrap().index().unwrap();
        assert!(html.contains("Avatar A"));
        assert!(html.contains("Avatar B"));
        assert!(html.contains("name=\"behaviours_b\""));
    }

    #[test]
    fn test_result_escapes_titles() {
        let avatar = GeneratedAvatar {
            title: "<b>Bold</b>".to_string(),
            filename: "bBoldb.png".to_string(),
            traits: analyze_text("", Role::Mentor, Profile::Mixed),
        };
        let html = Templates::new().unwrap().result(&[avatar]).unwrap();

        assert!(html.contains("&lt;b&gt;Bold"));
        assert!(!html.contains("<b>Bold"));
        assert!(html.contains("/download/bBoldb.png?inline=1"));
        assert!(html.contains("neutral"));
    }
}
