//! POST /tasks/breakdown, valid and invalid input.

use flowcheck_domain::{Difficulty, RequestSpec, is_positive_integer, missing_fields};
use serde_json::{Value, json};

use super::{TestRunner, show};
use crate::ports::{HttpClient, RunObserver};

const BREAKDOWN_PATH: &str = "/tasks/breakdown";

/// One input per template family the service recognizes
/// (study, read, write and the generic fallback).
const VALID_TASKS: [&str; 4] = [
    "Study for AP Calc test",
    "Read Chapter 5 Biology",
    "Write essay on Shakespeare",
    "Complete project proposal",
];

/// Appended to failures of the micro-task checks that go past the
/// documented breakdown contract (parent echo and 0-based order).
const STRICT_NOTE: &str = "strict check, beyond the documented breakdown contract";

/// Malformed bodies that must all be rejected with 400.
fn invalid_cases() -> [(Value, &'static str); 4] {
    [
        (json!({}), "empty body"),
        (json!({"task": ""}), "empty task"),
        (json!({"task": null}), "null task"),
        (json!({"notask": "test"}), "missing task field"),
    ]
}

impl<C: HttpClient> TestRunner<C> {
    /// Valid breakdown requests: response envelope, then every micro-task.
    pub(super) async fn check_breakdown_valid<O: RunObserver>(&mut self, observer: &mut O) {
        observer.on_section("Testing Task Breakdown - Valid Input...");

        for task in VALID_TASKS {
            let label = format!("Task breakdown '{task}'");
            let request = RequestSpec::post_json(BREAKDOWN_PATH, json!({ "task": task }));

            let response = match self.send(&request).await {
                Ok(response) => response,
                Err(e) => {
                    self.request_failed(observer, format!("{label} accessible"), &e);
                    continue;
                }
            };

            if response.status != 200 {
                self.fail(
                    observer,
                    format!("{label} returns 200"),
                    format!("Got status {}", response.status),
                );
                continue;
            }
            self.pass(observer, format!("{label} returns 200"));

            let Ok(data) = response.json() else {
                self.fail(
                    observer,
                    format!("{label} returns valid JSON"),
                    "Response is not valid JSON",
                );
                continue;
            };
            self.pass(observer, format!("{label} returns valid JSON"));

            let success = data.get("success");
            if success == Some(&Value::Bool(true)) {
                self.pass(observer, format!("{label} has success=true"));
            } else {
                self.fail(
                    observer,
                    format!("{label} has success=true"),
                    format!("Got success: {}", show(success)),
                );
            }

            match data.get("tasks").and_then(Value::as_array) {
                Some(tasks) => {
                    self.pass_with(
                        observer,
                        format!("{label} returns tasks array"),
                        format!("Got {} tasks", tasks.len()),
                    );
                    for (index, micro_task) in tasks.iter().enumerate() {
                        self.check_micro_task(observer, index, micro_task, task);
                    }
                }
                None => self.fail(
                    observer,
                    format!("{label} returns tasks array"),
                    "No tasks array in response",
                ),
            }
        }
    }

    /// Field presence first; value checks only run once every field exists.
    fn check_micro_task<O: RunObserver>(
        &mut self,
        observer: &mut O,
        index: usize,
        micro_task: &Value,
        parent: &str,
    ) {
        let prefix = format!("Micro-task {index}");

        let missing = missing_fields(micro_task);
        if !missing.is_empty() {
            for field in missing {
                self.fail(
                    observer,
                    format!("{prefix} has field '{field}'"),
                    format!("Missing field: {field}"),
                );
            }
            return;
        }
        self.pass(observer, format!("{prefix} has all required fields"));

        let difficulty = &micro_task["difficulty"];
        match Difficulty::from_json(difficulty) {
            Some(level) => self.pass_with(
                observer,
                format!("{prefix} has valid difficulty"),
                format!("Difficulty: {level}"),
            ),
            None => self.fail(
                observer,
                format!("{prefix} has valid difficulty"),
                format!("Invalid difficulty: {}", show(Some(difficulty))),
            ),
        }

        let completed = &micro_task["completed"];
        if completed == &Value::Bool(false) {
            self.pass(observer, format!("{prefix} completed=false"));
        } else {
            self.fail(
                observer,
                format!("{prefix} completed=false"),
                format!("Expected false, got: {}", show(Some(completed))),
            );
        }

        let minutes = &micro_task["estimatedTime"];
        if is_positive_integer(minutes) {
            self.pass_with(
                observer,
                format!("{prefix} has valid estimatedTime"),
                format!("Time: {minutes} min"),
            );
        } else {
            self.fail(
                observer,
                format!("{prefix} has valid estimatedTime"),
                format!("Invalid time: {}", show(Some(minutes))),
            );
        }

        let xp = &micro_task["xpReward"];
        if is_positive_integer(xp) {
            self.pass_with(
                observer,
                format!("{prefix} has valid xpReward"),
                format!("XP: {xp}"),
            );
        } else {
            self.fail(
                observer,
                format!("{prefix} has valid xpReward"),
                format!("Invalid XP: {}", show(Some(xp))),
            );
        }

        let echoed = &micro_task["parentTask"];
        if echoed.as_str() == Some(parent) {
            self.pass(observer, format!("{prefix} echoes parent task"));
        } else {
            self.fail(
                observer,
                format!("{prefix} echoes parent task"),
                format!(
                    "Expected: {parent}, Got: {} ({STRICT_NOTE})",
                    show(Some(echoed))
                ),
            );
        }

        let order = &micro_task["order"];
        if order.as_u64() == u64::try_from(index).ok() {
            self.pass(observer, format!("{prefix} has order {index}"));
        } else {
            self.fail(
                observer,
                format!("{prefix} has order {index}"),
                format!("Got order: {} ({STRICT_NOTE})", show(Some(order))),
            );
        }
    }

    /// Malformed requests: each must be answered with 400 and a JSON error.
    pub(super) async fn check_breakdown_invalid<O: RunObserver>(&mut self, observer: &mut O) {
        observer.on_section("Testing Task Breakdown - Invalid Input...");

        for (body, description) in invalid_cases() {
            let label = format!("Task breakdown with {description}");
            let request = RequestSpec::post_json(BREAKDOWN_PATH, body);

            let response = match self.send(&request).await {
                Ok(response) => response,
                Err(e) => {
                    self.request_failed(observer, format!("{label} request handled"), &e);
                    continue;
                }
            };

            if response.status != 400 {
                self.fail(
                    observer,
                    format!("{label} returns 400"),
                    format!("Got status {}", response.status),
                );
                continue;
            }
            self.pass(observer, format!("{label} returns 400"));

            match response.json() {
                Ok(data) => match data.get("error") {
                    Some(error) => self.pass_with(
                        observer,
                        format!("{label} has error message"),
                        format!("Error: {}", show(Some(error))),
                    ),
                    None => self.fail(
                        observer,
                        format!("{label} has error message"),
                        "No error field in response",
                    ),
                },
                Err(_) => self.fail(
                    observer,
                    format!("{label} returns valid JSON"),
                    "Response is not valid JSON",
                ),
            }
        }
    }
}
