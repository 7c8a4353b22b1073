//! Shared constants used across the application

/// First message of every fresh session.
pub const GREETING: &str = "I am the DSA Sage. Ask me about arrays, trees, or dynamic programming. Don't waste my time with anything else.";

/// The only message left after the user clears the chat.
pub const RESET_MESSAGE: &str = "Reset complete. Now, ask something algorithmically significant.";

/// Shown in place of a reply when the model call fails for any reason.
pub const FALLBACK_REPLY: &str = "Something went wrong. Even my algorithms have limits.";

/// Shown when the model answers successfully but without any text.
pub const EMPTY_REPLY: &str = "I have nothing to say to you.";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
pub const DEBUG_LOG_ENV: &str = "DSA_SAGE_LOG";

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a Data Structure and Algorithm instructor. \
Only answer questions about data structures and algorithms, and solve them in the simplest way. \
If the user asks about anything unrelated, refuse curtly and tell them to ask a sensible question. \
For on-topic questions reply politely with a simple explanation. \
Keep responses concise and helpful.";

/// Input placeholder rendered while the input box is empty.
pub const INPUT_PLACEHOLDER: &str = "Ask about Data Structures...";

pub const FOOTER_TEXT: &str = "Complexity: O(log n) • Status: Online";
