//! Process entry points for test programs.

use paltest_abi::{Outcome, PalRuntime};

use crate::klog_debug;
use crate::testing::{
    EnvSource, Harness, LoopConfig, PerfLoop, ProcessEnv, RealLifecycle, Reporter,
};

/// `true` when this build drives test bodies through the perf loop.
pub const PERF_MODE: bool = cfg!(feature = "perf");

/// Run `body` once against the real runtime lifecycle, then terminate with its
/// outcome. Bodies that terminate the runtime themselves never come back here.
pub fn run_direct<F>(
    runtime: &dyn PalRuntime,
    args: &[String],
    reporter: Reporter,
    mut body: F,
) -> !
where
    F: FnMut(&Harness<'_>, &[String]) -> Outcome,
{
    let lifecycle = RealLifecycle::new(runtime);
    let harness = Harness::new(runtime, &lifecycle, reporter);
    let outcome = body(&harness, args);
    harness.flush();
    klog_debug!("test body returned {:?}", outcome);
    runtime.terminate(outcome.exit_code())
}

/// Run `body` through the perf loop. The loop count is read from `env` after
/// the real initialize, since the runtime may own the environment.
pub fn run_perf<F>(
    runtime: &dyn PalRuntime,
    args: &[String],
    env: &dyn EnvSource,
    reporter: Reporter,
    body: F,
) -> !
where
    F: FnMut(&Harness<'_>, &[String]) -> Outcome,
{
    let initialized = PerfLoop::new(runtime).initialize(args);
    let config = LoopConfig::from_source(env);
    initialized.run(config, args, reporter, body).terminate()
}

/// Entry point used by `paltest_main!`: perf loop in `perf` builds, a single
/// direct run otherwise. Diagnostics go to stdout.
pub fn run<F>(runtime: &dyn PalRuntime, args: &[String], body: F) -> !
where
    F: FnMut(&Harness<'_>, &[String]) -> Outcome,
{
    if PERF_MODE {
        run_perf(runtime, args, &ProcessEnv, Reporter::stdout(), body)
    } else {
        run_direct(runtime, args, Reporter::stdout(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{expect_terminate, Captured, MockRuntime};
    use paltest_abi::{FAIL, LOOP_COUNT_ENV, PASS};

    fn quiet() -> Reporter {
        Reporter::with_writer(Captured::default())
    }

    fn loop_env(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name: &str| {
            if name == LOOP_COUNT_ENV {
                value.map(str::to_string)
            } else {
                None
            }
        }
    }

    /// Test body in the usual palsuite shape: initialize, check, terminate.
    fn conventional_body(
        calls: &mut u32,
        fail_on: Option<u32>,
    ) -> impl FnMut(&Harness<'_>, &[String]) -> Outcome + '_ {
        move |harness, args| {
            *calls += 1;
            if harness.initialize(args) != 0 {
                return Outcome::Fail;
            }
            let outcome = Outcome::from(Some(*calls) != fail_on);
            harness.terminate();
            outcome
        }
    }

    #[test]
    fn unset_loop_env_runs_once_and_passes() {
        let runtime = MockRuntime::new();
        let mut calls = 0;
        let code = expect_terminate(|| {
            run_perf(
                &runtime,
                &[],
                &loop_env(None),
                quiet(),
                conventional_body(&mut calls, None),
            );
        });
        assert_eq!(code, PASS);
        assert_eq!(calls, 1);
        assert_eq!(runtime.init_calls(), 1);
        assert_eq!(runtime.terminate_calls(), 1);
    }

    #[test]
    fn failure_on_third_of_three_iterations_fails_the_process() {
        let runtime = MockRuntime::new();
        let mut calls = 0;
        let code = expect_terminate(|| {
            run_perf(
                &runtime,
                &[],
                &loop_env(Some("3")),
                quiet(),
                conventional_body(&mut calls, Some(3)),
            );
        });
        assert_eq!(code, FAIL);
        assert_eq!(calls, 3);
        assert_eq!(runtime.init_calls(), 1);
        assert_eq!(runtime.terminate_calls(), 1);
    }

    #[test]
    fn early_failure_is_overwritten_by_later_passes() {
        let runtime = MockRuntime::new();
        let mut calls = 0;
        let code = expect_terminate(|| {
            run_perf(
                &runtime,
                &[],
                &loop_env(Some("3")),
                quiet(),
                conventional_body(&mut calls, Some(1)),
            );
        });
        assert_eq!(code, PASS);
        assert_eq!(calls, 3);
    }

    #[test]
    fn invalid_loop_env_runs_once() {
        for value in ["-5", "abc", "0"] {
            let runtime = MockRuntime::new();
            let mut calls = 0;
            let code = expect_terminate(|| {
                run_perf(
                    &runtime,
                    &[],
                    &loop_env(Some(value)),
                    quiet(),
                    conventional_body(&mut calls, None),
                );
            });
            assert_eq!(code, PASS);
            assert_eq!(calls, 1, "value {value:?}");
            assert_eq!(runtime.init_calls(), 1);
            assert_eq!(runtime.terminate_calls(), 1);
        }
    }

    #[test]
    fn failed_runtime_initialize_is_seen_by_every_iteration() {
        let runtime = MockRuntime::new().with_init_result(1);
        let mut calls = 0;
        let code = expect_terminate(|| {
            run_perf(
                &runtime,
                &[],
                &loop_env(Some("2")),
                quiet(),
                conventional_body(&mut calls, None),
            );
        });
        assert_eq!(code, FAIL);
        assert_eq!(calls, 2);
        assert_eq!(runtime.init_calls(), 1);
    }

    #[test]
    fn fail_inside_the_loop_terminates_once_with_fail() {
        let runtime = MockRuntime::new();
        let mut calls = 0;
        let code = expect_terminate(|| {
            run_perf(
                &runtime,
                &[],
                &loop_env(Some("5")),
                quiet(),
                |harness, _| {
                    calls += 1;
                    if calls == 2 {
                        crate::fail!(harness, "giving up on iteration {}", calls);
                    }
                    Outcome::Pass
                },
            );
        });
        assert_eq!(code, FAIL);
        assert_eq!(calls, 2);
        assert_eq!(runtime.init_calls(), 1);
        assert_eq!(runtime.terminate_calls(), 1);
    }

    #[test]
    fn direct_run_terminates_inside_the_body() {
        let runtime = MockRuntime::new();
        let mut calls = 0;
        let code = expect_terminate(|| {
            run_direct(&runtime, &[], quiet(), conventional_body(&mut calls, None));
        });
        assert_eq!(code, PASS);
        assert_eq!(calls, 1);
        assert_eq!(runtime.init_calls(), 1);
        assert_eq!(runtime.terminate_calls(), 1);
    }

    #[test]
    fn direct_run_terminates_with_the_returned_outcome() {
        let runtime = MockRuntime::new();
        let code = expect_terminate(|| {
            run_direct(&runtime, &[], quiet(), |harness, args| {
                harness.initialize(args);
                Outcome::Fail
            });
        });
        assert_eq!(code, FAIL);
        assert_eq!(runtime.init_calls(), 1);
        assert_eq!(runtime.terminate_calls(), 1);
    }
}
