//! One-way output port for detected recipes.
//!
//! Delivery is best-effort: nothing is acknowledged, nothing is retried and
//! sending never fails from the caller's point of view.

use serde::Serialize;
use tokio::sync::broadcast;

use super::recipe_extractor::{self, RecipeDraft};

const CHANNEL_CAPACITY: usize = 64;

/// Message delivered to the embedding parent page
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RecipeEvent {
    #[serde(rename = "NEW_RECIPE")]
    NewRecipe(RecipeDraft),
}

pub trait RecipeNotifier: Send + Sync {
    fn send(&self, event: RecipeEvent);

    fn notify(&self, draft: RecipeDraft) {
        self.send(RecipeEvent::NewRecipe(draft));
    }
}

/// Fan-out of recipe events to every connected subscriber
#[derive(Clone)]
pub struct RecipeFeed {
    tx: broadcast::Sender<RecipeEvent>,
}

impl Default for RecipeFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeFeed {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RecipeEvent> {
        self.tx.subscribe()
    }
}

impl RecipeNotifier for RecipeFeed {
    fn send(&self, event: RecipeEvent) {
        // No subscribers is not an error
        let _ = self.tx.send(event);
    }
}

/// Run the extractor over an assistant reply and forward any recipe found.
///
/// Returns whether a recipe was sent.
pub fn detect_and_notify(reply: &str, notifier: &dyn RecipeNotifier) -> bool {
    match recipe_extractor::extract(reply) {
        Some(draft) => {
            tracing::info!(
                title = %draft.title,
                ingredients = draft.ingredients.len(),
                steps = draft.steps.len(),
                "recipe detected"
            );
            notifier.notify(draft);
            true
        }
        None => {
            tracing::debug!("no structured recipe in reply");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Arroz con verduras".to_string(),
            ingredients: vec!["1 taza de arroz".to_string()],
            steps: vec!["Lava el arroz".to_string()],
        }
    }

    #[test]
    fn event_wire_shape() {
        let value = serde_json::to_value(RecipeEvent::NewRecipe(draft())).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "NEW_RECIPE",
                "data": {
                    "title": "Arroz con verduras",
                    "ingredients": ["1 taza de arroz"],
                    "steps": ["Lava el arroz"]
                }
            })
        );
    }

    #[tokio::test]
    async fn feed_delivers_to_subscribers() {
        let feed = RecipeFeed::new();
        let mut rx = feed.subscribe();
        feed.notify(draft());
        assert_eq!(rx.recv().await.unwrap(), RecipeEvent::NewRecipe(draft()));
    }

    #[test]
    fn feed_without_subscribers_does_not_fail() {
        let feed = RecipeFeed::new();
        feed.notify(draft());
        assert!(!detect_and_notify("solo charla, sin receta", &feed));
    }
}
