//! Fixed content compiled into the app: greeting, quick replies, keyword
//! replies and the starter workout plan.

/// First assistant message of every conversation session
pub const GREETING: &str = "Hi! 👋 I'm your AI fitness assistant. I'm here to help you achieve your fitness goals! How can I assist you today?";

/// Quick-reply prompts offered at the start of a conversation
pub const TEMPLATES: [&str; 5] = [
    "Tell me about my workout plan",
    "What should I eat today?",
    "How many calories should I consume?",
    "Give me fitness tips",
    "Track my progress",
];

/// Keyword table in priority order. The first keyword contained in the
/// lowercased input wins.
pub const KEYWORD_REPLIES: [(&str, &str); 7] = [
    (
        "workout",
        "Great question! Based on your profile, you should focus on strength training 3-4 times per week. Make sure to include compound exercises like squats, deadlifts, and bench press for maximum results! 💪",
    ),
    (
        "eat",
        "For today, I recommend following your Week 1 meal plan: Oatmeal with berries for breakfast, grilled chicken salad for lunch, and salmon with roasted vegetables for dinner. This will keep you at your target calorie intake! 🍎",
    ),
    (
        "calories",
        "Based on your TDEE calculation, you should aim for around 2,200-2,400 calories per day to meet your fitness goals. Make sure to balance your macros: 40% carbs, 30% protein, 30% fats! 📊",
    ),
    (
        "tips",
        "Here are some quick fitness tips: 1) Stay hydrated - drink at least 8 glasses of water daily 💧 2) Get 7-9 hours of sleep 😴 3) Don't skip warm-ups 🔥 4) Progressive overload is key 📈 5) Rest days are important for recovery! ✨",
    ),
    (
        "progress",
        "You're doing amazing! You've completed 65% of your workouts this week and stayed within your calorie goals for 5 out of 7 days. Keep up the excellent work! 🎉",
    ),
    (
        "hello",
        "Hey there! 👋 I'm here to help you with your fitness and nutrition journey. What would you like to know?",
    ),
    (
        "help",
        "I can help you with:\n• Workout plans and exercises\n• Nutrition and meal planning\n• Calorie tracking\n• Fitness tips and motivation\n• Progress tracking\n\nWhat do you need help with? 😊",
    ),
];

/// Reply used when no keyword matches; echoes the normalized input
pub fn fallback_reply(normalized_input: &str) -> String {
    format!(
        "I understand you're asking about '{}'. While I don't have a specific answer for that, I'm here to help with your fitness journey! Try asking about workouts, nutrition, or your progress. 💪",
        normalized_input
    )
}

/// Starter workout plan
pub const WORKOUT_DOCUMENT: &str = include_str!("../data/workouts.json");
