// LLM prompt constants for personalized question generation.

/// System prompt for question generation, enforces JSON-only output.
pub const QUESTION_SYSTEM: &str = "You are a professional psychologist creating a personalized \
    emotional wellness self-assessment. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Question generation prompt template.
/// Replace: {care_instruction}, {name}, {age}, {gender}, {occupation}, {location},
///          {question_count}, {language}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"{care_instruction}

User Profile:
- Name: {name}
- Age: {age}
- Gender: {gender}
- Occupation: {occupation}
- Location: {location}

Create exactly {question_count} personalized questions in {language} that assess emotional well-being, tailored to this person's profile. Each question must have exactly 4 multiple choice options, ordered from the healthiest answer to the most concerning one.

Consider:
- Age-appropriate concerns and life stages
- Occupation-related stress factors
- Cultural context from their location
- Gender-specific considerations when relevant
- Use their name occasionally to make it personal

Return a JSON object with this EXACT schema (no extra fields):
{
  "context": "Brief explanation of how questions were personalized for this user",
  "questions": [
    {
      "text": "Question text using their name/context",
      "options": ["Option 1", "Option 2", "Option 3", "Option 4"]
    }
  ]
}

Make questions that range from basic emotional awareness to deeper psychological insights. Include questions about stress, relationships, work-life balance, self-esteem, and coping mechanisms relevant to their profile."#;
