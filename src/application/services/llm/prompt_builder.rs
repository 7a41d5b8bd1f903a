//! Prompt building functions for LLM requests

use crate::application::ports::outbound::{ChatMessage, LlmRequest};
use crate::domain::value_objects::{Interests, Mood};

pub const STORY_SYSTEM_PROMPT: &str =
    "You are a creative storyteller using characters and imagery.";

/// Target length of the generated story, in words
pub const STORY_WORDS: u32 = 50;

const STORY_MAX_TOKENS: u32 = 150;
const STORY_TEMPERATURE: f32 = 0.7;

const ENVIRONMENTAL_DATA_MAX_TOKENS: u32 = 100;
const ENVIRONMENTAL_DATA_TEMPERATURE: f32 = 0.8;

const LIST_MAX_TOKENS: u32 = 400;
const LIST_TEMPERATURE: f32 = 0.7;

/// How many challenges, species and NGOs to ask for
pub const CHALLENGE_COUNT: usize = 5;
pub const SPECIES_COUNT: usize = 3;
pub const NGO_COUNT: usize = 3;

/// Story request: narrative plus mood, fixed storyteller persona
pub fn story_request(narrative: &str, mood: Mood) -> LlmRequest {
    let user = format!(
        "{} The mood is '{}', write a story about how the environment feels in {} words.",
        narrative, mood, STORY_WORDS
    );
    LlmRequest::new(vec![ChatMessage::user(user)])
        .with_system_prompt(STORY_SYSTEM_PROMPT)
        .with_max_tokens(STORY_MAX_TOKENS)
        .with_temperature(STORY_TEMPERATURE)
}

/// Today's eco-challenges for a city, as a JSON array of strings
pub fn challenges_request(city: &str, interests: &Interests) -> LlmRequest {
    let mut prompt = format!(
        "Suggest {} simple eco-friendly challenges that someone living in {} can complete today.",
        CHALLENGE_COUNT, city
    );
    if !interests.is_empty() {
        prompt.push_str(&format!(
            " Focus on these interests: {}.",
            interests.joined()
        ));
    }
    prompt.push_str(
        "\nRespond with only a JSON array of short strings, one per challenge, and no other text.",
    );
    list_request(prompt)
}

/// Endangered species near a city
pub fn species_request(city: &str) -> LlmRequest {
    let prompt = format!(
        "List {} endangered species found in or near {}.\n\
         Respond with only a JSON array of objects. Each object must have exactly the keys \
         \"name\", \"population\" and \"description\", all with string values. No other text.",
        SPECIES_COUNT, city
    );
    list_request(prompt)
}

/// Environmental NGOs near a city matching the user's interests
pub fn ngos_request(city: &str, interests: &Interests) -> LlmRequest {
    let focus = if interests.is_empty() {
        "environmental protection".to_string()
    } else {
        interests.joined()
    };
    let prompt = format!(
        "List {} environmental NGOs active in or near {} that work on: {}.\n\
         Respond with only a JSON array of objects. Each object must have exactly the keys \
         \"name\", \"location\" and \"focus\", all with string values. No other text.",
        NGO_COUNT, city, focus
    );
    list_request(prompt)
}

/// Simulated environmental indicators for a city
pub fn environmental_data_request(city: &str) -> LlmRequest {
    let prompt = format!(
        "Generate simulated environmental data for {} as a JSON object with exactly these keys:\n\
         1. \"AQI\"\n2. \"Deforestation Rate\"\n3. \"Water Quality\"\n4. \"Biodiversity Impact\"\n\
         Respond with the JSON object only.",
        city
    );
    LlmRequest::new(vec![ChatMessage::user(prompt)])
        .with_max_tokens(ENVIRONMENTAL_DATA_MAX_TOKENS)
        .with_temperature(ENVIRONMENTAL_DATA_TEMPERATURE)
}

fn list_request(prompt: String) -> LlmRequest {
    LlmRequest::new(vec![ChatMessage::user(prompt)])
        .with_max_tokens(LIST_MAX_TOKENS)
        .with_temperature(LIST_TEMPERATURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_request() {
        let request = story_request(
            "In London, the weather is Clouds with a temperature of 18°C.",
            Mood::Cloudy,
        );

        let messages = request.ordered_messages();
        assert_eq!(messages[0], ChatMessage::system(STORY_SYSTEM_PROMPT));
        assert_eq!(
            messages[1].content,
            "In London, the weather is Clouds with a temperature of 18°C. \
             The mood is 'cloudy', write a story about how the environment feels in 50 words."
        );
        assert_eq!(request.max_tokens, Some(150));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[test]
    fn test_challenges_request_mentions_interests() {
        let interests = Interests::new(["Reforestation", "Waste Reduction"]);
        let prompt = &challenges_request("Lagos", &interests).messages[0].content;

        assert!(prompt.contains("Lagos"));
        assert!(prompt.contains("Reforestation, Waste Reduction"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_ngos_request_defaults_focus() {
        let prompt = &ngos_request("Quito", &Interests::default()).messages[0].content;
        assert!(prompt.contains("environmental protection"));
        assert!(prompt.contains("\"focus\""));
    }
}
