//! Avatar Application Service (Use Case)
//!
//! analyze → render → store, one request at a time.

use std::sync::Arc;

use mentor_avatar::{
    analyze_behaviours, render_avatar_png, AvatarRequest, AvatarStore, DomainError, FontFace,
    GeneratedAvatar, Profile, Role, TraitRecord,
};

/// Application service for avatar generation
pub struct AvatarService<S: AvatarStore> {
    store: Arc<S>,
    font: FontFace,
}

impl<S: AvatarStore> AvatarService<S> {
    pub fn new(store: Arc<S>, font: FontFace) -> Self {
        Self { store, font }
    }

    /// Derive traits without rendering anything
    pub fn analyze(&self, behaviours: &[String], role: Role, profile: Profile) -> TraitRecord {
        analyze_behaviours(behaviours, role, profile)
    }

    /// Analyze, render and store one avatar
    pub async fn generate(&self, request: AvatarRequest) -> Result<GeneratedAvatar, DomainError> {
        let traits = analyze_behaviours(&request.behaviours, request.role, request.profile);
        let filename = request.filename();

        let font = self.font.clone();
        let render_traits = traits.clone();
        let AvatarRequest {
            title, behaviours, ..
        } = request;
        let (title, png) = tokio::task::spawn_blocking(move || {
            let png = render_avatar_png(&title, &behaviours, &render_traits, &font);
            (title, png)
        })
        .await
        .map_err(|e| DomainError::Render(format!("Render task failed: {e}")))?;
        let png = png?;

        self.store.save(&filename, &png).await?;

        tracing::info!(
            "Generated avatar '{}' -> {} ({}, {})",
            title,
            filename,
            traits.role,
            traits.summary()
        );

        Ok(GeneratedAvatar {
            title,
            filename,
            traits,
        })
    }

    /// Stored PNG bytes, `None` if never generated
    pub async fn fetch(&self, filename: &str) -> Result<Option<Vec<u8>>, DomainError> {
        self.store.load(filename).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mentor_avatar::{Energy, Mood, Openness, Reliability, Warmth};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl AvatarStore for MemoryStore {
        async fn save(&self, filename: &str, png: &[u8]) -> Result<(), DomainError> {
            self.files
                .lock()
                .unwrap()
                .insert(filename.to_string(), png.to_vec());
            Ok(())
        }

        async fn load(&self, filename: &str) -> Result<Option<Vec<u8>>, DomainError> {
            Ok(self.files.lock().unwrap().get(filename).cloned())
        }
    }

    fn service() -> (AvatarService<MemoryStore>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (AvatarService::new(store.clone(), FontFace::builtin()), store)
    }

    #[tokio::test]
    async fn test_generate_listening_mentor() {
        let (service, store) = service();
        let request = AvatarRequest::new(
            "Test Mentor",
            Role::Mentor,
            Profile::Ultimate,
            vec!["Listens deeply".to_string(), "Encourages reflection".to_string()],
        );

        let avatar = service.generate(request).await.unwrap();

        assert_eq!(avatar.filename, "Test_Mentor.png");
        assert_eq!(avatar.traits.mood, Mood::Good);
        assert_eq!(avatar.traits.energy, Energy::Medium);
        assert_eq!(avatar.traits.reliability, Reliability::High);
        assert_eq!(avatar.traits.warmth, Warmth::Neutral);
        assert_eq!(avatar.traits.openness, Openness::Open);
        assert!(store.files.lock().unwrap().contains_key("Test_Mentor.png"));
    }

    #[tokio::test]
    async fn test_same_input_same_bytes() {
        let (service, _) = service();
        let request = AvatarRequest::new(
            "Twice",
            Role::Trainee,
            Profile::Worst,
            vec!["Interrupts others".to_string()],
        );

        service.generate(request.clone()).await.unwrap();
        let first = service.fetch("Twice.png").await.unwrap().unwrap();
        service.generate(request).await.unwrap();
        let second = service.fetch("Twice.png").await.unwrap().unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_fetch_unknown_is_none() {
        let (service, _) = service();
        assert!(service.fetch("nobody.png").await.unwrap().is_none());
    }

    #[test]
    fn test_analyze_does_not_store() {
        let (service, store) = service();
        let traits = service.analyze(&["Tired".to_string()], Role::Trainee, Profile::Mixed);
        assert_eq!(traits.role, Role::Trainee);
        assert!(store.files.lock().unwrap().is_empty());
    }
}
