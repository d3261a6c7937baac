//! Local password strength analysis
//!
//! Scores a password from its length, character classes, entropy and a
//! handful of well-known weak patterns. Nothing here leaves the process.

use serde::Serialize;
use std::collections::HashSet;

/// Guesses per second assumed for a modern GPU rig
const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "qwerty", "abc123", "monkey", "1234567", "letmein",
    "trustno1", "dragon", "baseball", "iloveyou", "master", "sunshine", "ashley", "bailey",
    "passw0rd", "shadow", "123123", "654321", "superman", "qazwsx", "michael", "football",
    "password1", "password123", "admin", "welcome", "login", "admin123", "root", "toor",
];

/// Passwords seen in well-known public breaches (RockYou, LinkedIn, Adobe,
/// Yahoo, MySpace and others). Matched exactly or in lowercase.
const BREACHED_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "qwerty", "abc123", "111111", "monkey", "1234567",
    "letmein", "trustno1", "dragon", "baseball", "iloveyou", "master", "sunshine",
    "ashley", "bailey", "passw0rd", "shadow", "123123", "654321", "superman", "qazwsx",
    "michael", "football", "password1", "password123", "admin", "welcome", "login",
    "admin123", "root", "toor", "pass", "test", "guest", "info", "adm", "mysql",
    "user", "administrator", "oracle", "ftp", "pi", "puppet", "ansible", "ec2-user",
    "vagrant", "azureuser", "academico", "acceso", "access", "accounting", "action",
    "password!", "password1!", "Password1", "Password123", "Qwerty123", "Abc123",
    "123456789", "1234567890", "12345", "123456a", "1234abcd", "a123456", "password1234",
    "qwerty123", "qwertyuiop", "asdfghjkl", "zxcvbnm", "iloveyou1", "welcome1",
    "batman", "superman1", "ninja", "mustang", "jesus", "jennifer", "jordan", "michelle",
    "robert", "daniel", "taylor", "thomas", "nicole", "Jessica", "Charlie", "whatever",
    "linkedin", "link", "work", "career", "jobseeker", "professional", "business",
    "network", "connection", "resume", "cv", "job", "hiring", "recruiter",
    "adobe123", "photoshop", "creative", "design", "graphics", "adobe", "acrobat",
    "illustrator", "indesign", "lightroom", "premiere", "aftereffects",
    "yahoo", "yahoo123", "ymail", "rocketmail", "yahoo!", "yahoo1",
    "myspace", "myspace1", "space", "tom", "music", "band", "emo",
    "cheater", "affair", "secret", "discrete", "married",
    "dropbox", "dropbox1", "storage", "cloud", "files", "backup",
    "tumblr", "blog", "reblog", "post", "tumblr1",
    "travel", "holiday", "vacation", "passport", "ticket", "flight",
    "letmein123", "trustno1!", "dragon123", "baseball1", "football1",
    "1q2w3e4r", "1q2w3e4r5t", "qwertyuiop123", "asdfghjkl123", "zxcvbnm123",
    "1qaz2wsx", "1qaz@WSX", "qwerty12345", "qwerty1234", "password12",
    "passw0rd1", "p@ssw0rd", "p@ssword", "P@ssw0rd", "P@ssword1",
    "000000", "112233", "121212", "123321", "1234", "123qwe", "1q2w3e",
    "555555", "666666", "696969", "777777",
    "princess", "starwars", "pokemon", "computer", "internet", "freedom", "cheese",
    "password2020", "password2021", "password2022", "password2023", "password2024",
    "123456789a", "Passw0rd", "Passw0rd1", "Password1!", "Password123!",
    "Collection1", "Collection2", "Collection3", "Collection4", "Collection5",
    "company", "company1", "work123", "office", "office123",
    "corporate", "employee", "staff", "manager", "director",
    "yankees", "lakers", "patriots", "cowboys", "steelers", "celtics",
    "john123", "mike123", "sarah123", "emma123", "alex123", "chris123",
    "qweasd", "qweasdzxc", "qazwsxedc", "zaq12wsx", "xsw23edc",
    "password#", "password$", "password*", "password@",
    "admin123!", "admin@123", "root123", "root@123",
];

const COMMON_WORDS: &[&str] = &[
    "love", "god", "sex", "life", "king", "queen", "prince", "princess", "baby", "angel",
    "computer", "internet", "bitcoin", "hello", "world", "test", "sample", "demo",
];

/// Strength bucket derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
    Excellent,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => Strength::Weak,
            30..=49 => Strength::Fair,
            50..=69 => Strength::Good,
            70..=84 => Strength::Strong,
            _ => Strength::Excellent,
        }
    }
}

/// Estimated brute-force time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeToCrack {
    pub seconds: f64,
    pub display: String,
}

/// Full strength report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub strength: Strength,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_special: bool,
    pub character_types: usize,
    pub unique_chars: usize,
    pub entropy: f64,
    pub time_to_crack: TimeToCrack,
    pub vulnerabilities: Vec<String>,
    pub suggestions: Vec<String>,
    pub has_patterns: bool,
    pub is_breached: bool,
}

/// Shannon-style entropy estimate: `length * log2(charset size)`
pub fn entropy(password: &str) -> f64 {
    let mut charset = 0u32;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        charset += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        charset += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        charset += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        charset += 32;
    }

    if charset == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(charset).log2()
}

/// Average time to brute-force a password of the given entropy
pub fn time_to_crack(entropy: f64) -> TimeToCrack {
    let combinations = 2f64.powf(entropy);
    let seconds = (combinations / (GUESSES_PER_SECOND * 2.0)).min(f64::MAX);

    let display = if seconds < 1.0 {
        "Instant".to_string()
    } else if seconds < 60.0 {
        format!("{} seconds", seconds.round())
    } else if seconds < 3_600.0 {
        format!("{} minutes", (seconds / 60.0).round())
    } else if seconds < 86_400.0 {
        format!("{} hours", (seconds / 3_600.0).round())
    } else if seconds < 2_592_000.0 {
        format!("{} days", (seconds / 86_400.0).round())
    } else if seconds < 31_536_000.0 {
        format!("{} months", (seconds / 2_592_000.0).round())
    } else if seconds < 3_153_600_000.0 {
        format!("{} years", (seconds / 31_536_000.0).round())
    } else {
        "Centuries".to_string()
    };

    TimeToCrack { seconds, display }
}

/// Whether the password is on the known breached list, as typed or lowercased
pub fn is_known_breached(password: &str) -> bool {
    let lower = password.to_lowercase();
    BREACHED_PASSWORDS
        .iter()
        .any(|&breached| breached == password || breached == lower)
}

/// Whether the password contains a predictable pattern: a single repeated
/// character, a leading ascending run of digits or letters, or any
/// character repeated three or more times in a row.
pub fn has_predictable_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < 2 {
        return false;
    }

    if chars.iter().all(|&c| c == chars[0]) {
        return true;
    }

    if chars.len() >= 3 && starts_with_ascending_run(&chars[..3]) {
        return true;
    }

    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn starts_with_ascending_run(head: &[char]) -> bool {
    if head.iter().all(|c| c.is_ascii_digit()) {
        let d: Vec<u32> = head.iter().filter_map(|c| c.to_digit(10)).collect();
        // 890 wraps around through zero
        return (d[1] == (d[0] + 1) % 10 && d[2] == (d[1] + 1) % 10) && d[0] <= 8;
    }

    if head.iter().all(|c| c.is_ascii_alphabetic()) {
        let l: Vec<u8> = head.iter().map(|c| c.to_ascii_lowercase() as u8).collect();
        return l[1] == l[0] + 1 && l[2] == l[1] + 1;
    }

    false
}

/// Analyze `password` and produce a scored report
pub fn analyze(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let lower = password.to_lowercase();

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_numbers = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let character_types = [has_lowercase, has_uppercase, has_numbers, has_special]
        .iter()
        .filter(|&&present| present)
        .count();
    let unique_chars = password.chars().collect::<HashSet<_>>().len();
    let entropy = entropy(password);
    let time_to_crack = time_to_crack(entropy);

    let mut vulnerabilities = Vec::new();
    let mut suggestions = Vec::new();
    let mut score: i64 = 0;

    let is_breached = is_known_breached(password);
    if is_breached {
        vulnerabilities
            .push("⚠️ CRITICAL: This password was found in breach databases".to_string());
        suggestions.push(
            "IMMEDIATELY change this password - it has been compromised in data breaches"
                .to_string(),
        );
        score -= 50;
    }

    if length < 8 {
        vulnerabilities.push("Password is too short (minimum 8 characters)".to_string());
        suggestions.push("Use at least 12 characters for better security".to_string());
        score += length as i64 * 2;
    } else if length < 12 {
        suggestions.push("Consider using 12+ characters for optimal security".to_string());
        score += length as i64 * 3;
    } else if length < 16 {
        score += length as i64 * 4;
    } else {
        score += length as i64 * 5;
    }

    let classes = [
        (has_lowercase, 5, "No lowercase letters", "Add lowercase letters (a-z)"),
        (has_uppercase, 5, "No uppercase letters", "Add uppercase letters (A-Z)"),
        (has_numbers, 5, "No numbers", "Add numbers (0-9)"),
        (has_special, 10, "No special characters", "Add special characters (!@#$%^&*)"),
    ];
    for (present, bonus, missing, suggestion) in classes {
        if present {
            score += bonus;
        } else {
            vulnerabilities.push(missing.to_string());
            suggestions.push(suggestion.to_string());
        }
    }

    if COMMON_PASSWORDS.iter().any(|common| lower.contains(common)) {
        vulnerabilities.push("Contains common password pattern".to_string());
        suggestions.push("Avoid using common passwords".to_string());
        score -= 20;
    }

    if COMMON_WORDS.iter().any(|word| lower.contains(word)) {
        vulnerabilities.push("Contains common dictionary word".to_string());
        suggestions.push("Avoid using dictionary words".to_string());
        score -= 10;
    }

    let has_patterns = has_predictable_pattern(password);
    if has_patterns {
        vulnerabilities.push("Contains predictable pattern or sequence".to_string());
        suggestions.push("Avoid sequential or repeated characters".to_string());
        score -= 15;
    }

    if length > 0 {
        let unique_ratio = unique_chars as f64 / length as f64;
        if unique_ratio < 0.5 {
            vulnerabilities.push("Too many repeated characters".to_string());
            score -= 10;
        } else {
            score += (unique_ratio * 10.0).round() as i64;
        }
    }

    score += ((entropy / 2.0).round() as i64).min(30);

    let score = score.clamp(0, 100) as u8;

    StrengthReport {
        score,
        strength: Strength::from_score(score),
        length,
        has_lowercase,
        has_uppercase,
        has_numbers,
        has_special,
        character_types,
        unique_chars,
        entropy,
        time_to_crack,
        vulnerabilities,
        suggestions,
        has_patterns,
        is_breached,
    }
}
