//! Identifier case conversions.
//!
//! These do not follow the usual heck/convert_case rules: a run of capitals
//! and the digits directly following it form one word (`TF2Error` becomes
//! `tf2_error`), and the last capital of a run starts a new word when
//! lowercase letters follow it (`TFMessage` becomes `tf_message`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ParserConfig;

lazy_static! {
    static ref SERVICE_SUFFIX: Regex = Regex::new(r"_(?:Request|Response)$").unwrap();
    static ref ACTION_SUFFIX:  Regex = Regex::new(
        r"_(?:Goal|Result|Feedback|SendGoal_Request|SendGoal_Response|GetResult_Request|GetResult_Response|FeedbackMessage)$"
    ).unwrap();
    static ref ACTION_SERVICE_SUFFIX: Regex = Regex::new(r"_(?:SendGoal|GetResult)$").unwrap();
}

/// `float64_values_default` -> `Float64ValuesDefault`
pub fn snake_to_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut upper_next = true;
    for c in input.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `MultiDOFJointTrajectoryPoint` -> `multi_dof_joint_trajectory_point`
pub fn camel_to_snake(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    let mut run = 0;

    for (i, &c) in chars.iter().enumerate() {
        if !(c.is_uppercase() || (run > 0 && c.is_numeric())) {
            run = 0;
            out.push(c);
            continue;
        }
        run += 1;
        let starts_word = match chars.get(i + 1) {
            _ if i == 0 => false,
            _ if run == 1 => true,
            None => false,
            Some(next) => !(next.is_uppercase() || next.is_numeric()),
        };
        if starts_word {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Identifier of a field in the native struct; reserved words get an
/// underscore prefix.
pub fn native_name(name: &str, config: &ParserConfig) -> String {
    if config.is_reserved(name) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// `AddTwoInts_Request` -> `AddTwoInts`
pub fn service_name_from_half(name: &str) -> String {
    SERVICE_SUFFIX.replace(name, "").into_owned()
}

/// `Fibonacci_SendGoal_Request` -> `Fibonacci`
pub fn action_name_from_message(name: &str) -> String {
    ACTION_SUFFIX.replace(name, "").into_owned()
}

/// `Fibonacci_GetResult` -> `Fibonacci`
pub fn action_name_from_service(name: &str) -> String {
    ACTION_SERVICE_SUFFIX.replace(name, "").into_owned()
}
