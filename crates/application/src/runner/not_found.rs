//! GET on an undefined route

use flowcheck_domain::RequestSpec;

use super::{TestRunner, show};
use crate::ports::{HttpClient, RunObserver};

impl<C: HttpClient> TestRunner<C> {
    /// Unknown route: 404, then a JSON body with an `error` field. The body
    /// is inspected whatever the status turned out to be.
    pub(super) async fn check_unknown_route<O: RunObserver>(&mut self, observer: &mut O) {
        observer.on_section("Testing Non-existent Endpoint...");

        let response = match self.send(&RequestSpec::get("/nonexistent")).await {
            Ok(response) => response,
            Err(e) => {
                self.request_failed(observer, "Non-existent endpoint accessible", &e);
                return;
            }
        };

        if response.status == 404 {
            self.pass(observer, "Non-existent endpoint returns 404");
        } else {
            self.fail(
                observer,
                "Non-existent endpoint returns 404",
                format!("Got status {}", response.status),
            );
        }

        match response.json() {
            Ok(data) => match data.get("error") {
                Some(error) => self.pass_with(
                    observer,
                    "404 response has error message",
                    format!("Error: {}", show(Some(error))),
                ),
                None => self.fail(
                    observer,
                    "404 response has error message",
                    "No error field in response",
                ),
            },
            Err(_) => self.fail(
                observer,
                "404 response is valid JSON",
                "Response is not valid JSON",
            ),
        }
    }
}
