// Demo classifier: offline mock scores for trying the TUI without a model
//
// Scores come from a small keyword lexicon over the same 28 labels the real
// model emits, then get the same treatment as the model's output: rounded to
// four decimals, sorted descending, top five kept.
//
// Run with: MOODSCOPE_DEMO=1 cargo run --release

use super::{AnalysisRequest, ClassifierError, EmotionClassifier, EmotionScores};
use futures::future::BoxFuture;
use std::time::Duration;

/// Labels the production model is trained on
pub const EMOTION_LABELS: [&str; 28] = [
    "anger",
    "anticipation",
    "disgust",
    "fear",
    "joy",
    "love",
    "optimism",
    "pessimism",
    "sadness",
    "surprise",
    "trust",
    "neutral",
    "excitement",
    "gratitude",
    "pride",
    "confusion",
    "embarrassment",
    "guilt",
    "shame",
    "anxiety",
    "desire",
    "jealousy",
    "disappointment",
    "amusement",
    "contentment",
    "relief",
    "boredom",
    "frustration",
];

/// Keyword stems that push a label up
const LEXICON: &[(&str, &[&str])] = &[
    ("joy", &["happy", "glad", "joy", "delight", "great", "wonderful"]),
    ("excitement", &["excit", "thrill", "can't wait", "amazing"]),
    ("pride", &["proud", "accomplish", "achiev"]),
    ("optimism", &["hope", "better", "looking forward", "bright"]),
    ("love", &["love", "adore", "dear"]),
    ("gratitude", &["thank", "grateful", "appreciat"]),
    ("sadness", &["sad", "cry", "tears", "lonely", "miss"]),
    ("disappointment", &["disappoint", "let down", "expected more"]),
    ("anger", &["angry", "furious", "hate", "rage"]),
    ("frustration", &["frustrat", "annoy", "stuck"]),
    ("fear", &["afraid", "scare", "terrif", "fear"]),
    ("anxiety", &["anxious", "nervous", "worr"]),
    ("surprise", &["surpris", "unexpected", "wow"]),
    ("relief", &["relief", "relieved", "finally"]),
    ("boredom", &["bored", "boring", "dull"]),
    ("confusion", &["confus", "unclear", "don't understand"]),
];

/// Marker that makes the demo classifier answer like an unavailable model
const FAILURE_MARKER: &str = "#fail";

const TOP_N: usize = 5;

/// Offline classifier used in demo mode
pub struct DemoClassifier {
    latency: Duration,
}

impl DemoClassifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Score text synchronously (no latency, no failure marker)
    pub fn score(text: &str) -> EmotionScores {
        let lowered = text.to_lowercase();

        let mut scored: Vec<(String, f64)> = EMOTION_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let hits = LEXICON
                    .iter()
                    .filter(|(l, _)| l == label)
                    .flat_map(|(_, stems)| stems.iter())
                    .filter(|stem| lowered.contains(*stem))
                    .count();
                // Small label-dependent floor keeps the background ordering stable
                let floor = 0.01 + (i as f64) * 0.0007;
                let p = if hits == 0 {
                    floor
                } else {
                    (0.45 + 0.18 * hits as f64).min(0.98)
                };
                (label.to_string(), round4(p))
            })
            .collect();

        if scored.iter().all(|(_, p)| *p < 0.1) {
            if let Some(neutral) = scored.iter_mut().find(|(l, _)| l == "neutral") {
                neutral.1 = 0.62;
            }
        }

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(TOP_N);
        EmotionScores::new(scored)
    }
}

impl Default for DemoClassifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

impl EmotionClassifier for DemoClassifier {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn predict(
        &self,
        request: AnalysisRequest,
    ) -> BoxFuture<'static, Result<EmotionScores, ClassifierError>> {
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;

            if request.text.contains(FAILURE_MARKER) {
                return Err(ClassifierError::Server {
                    status: 503,
                    status_text: "Service Unavailable".to_string(),
                    message: Some("Model test failed: demo failure requested".to_string()),
                });
            }

            Ok(Self::score(&request.text))
        })
    }
}

fn round4(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_drive_the_top_label() {
        let scores = DemoClassifier::score("I'm so happy and glad today");
        let (top, p) = scores.iter().next().unwrap();
        assert_eq!(top, "joy");
        assert!(p > 0.5);
    }

    #[test]
    fn keeps_top_five_sorted() {
        let scores = DemoClassifier::score("happy, proud and a bit nervous");
        assert_eq!(scores.len(), TOP_N);
        let probs: Vec<f64> = scores.iter().map(|(_, p)| p).collect();
        assert!(probs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn no_keywords_is_neutral() {
        let scores = DemoClassifier::score("The meeting is at noon.");
        assert_eq!(scores.iter().next().unwrap().0, "neutral");
    }

    #[tokio::test]
    async fn failure_marker_yields_server_error() {
        let classifier = DemoClassifier::new(Duration::ZERO);
        let request = AnalysisRequest::from_raw("please #fail").unwrap();
        let err = classifier.predict(request).await.unwrap_err();
        assert!(matches!(err, ClassifierError::Server { status: 503, .. }));
    }
}
