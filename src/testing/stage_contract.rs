use crate::stage::Stage;
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " it's-a test ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocation.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", "abc def", ""]
    }

    /// Input/output pairs that verify known transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal stage contract:
///
/// 1. `zero_copy_when_no_changes`: no allocation when input == output
/// 2. `stage_is_idempotent`: applying twice yields the same result as once
/// 3. `needs_apply_is_accurate`: `needs_apply` predicts whether `apply` changes text
/// 4. `handles_empty_string`: `""` stays `""`
/// 5. `no_panic_on_mixed_scripts`: survives non-ASCII input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let mut text = Cow::Borrowed(input);

        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
            assert!(
                !std::ptr::eq(input, text.as_ref()),
                "stage `{}` claimed a change but returned the input on `{input}`",
                stage.name()
            );
        } else {
            assert!(std::ptr::eq(input, text.as_ref()));
        }

        // Second pass must never allocate again.
        let before: *const str = text.as_ref();
        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
        }
        assert!(
            std::ptr::eq(before, text.as_ref()),
            "zero-copy violated on second pass of `{}` (input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let mut text = Cow::Borrowed(pass_through);
        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
        }
        assert_eq!(text.as_ref(), pass_through);
        assert!(
            matches!(text, Cow::Borrowed(b) if std::ptr::eq(b, pass_through)),
            "zero-copy violated on pass-through sample `{pass_through}`"
        );
    }

    for &(input, expected) in S::should_transform() {
        let mut text = Cow::Borrowed(input);
        if stage.needs_apply(&text).unwrap() {
            text = stage.apply(text).unwrap();
        }
        assert_eq!(text.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        let once = stage.apply(Cow::Borrowed(input)).unwrap();
        let twice = stage.apply(once.clone()).unwrap();
        assert_eq!(once, twice, "apply() not idempotent on `{input}`");
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let must_check = ["", "hello", "world123", " !@#", "Hello World"];
    for &sample in S::samples().iter().chain(must_check.iter()) {
        check_accuracy(&stage, sample);
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input).expect("needs_apply errored");
    // Owned input so stages that always allocate are not penalised.
    let output = stage
        .apply(Cow::Owned(input.to_owned()))
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    let empty: &str = "";
    let result = if stage.needs_apply(empty).unwrap() {
        stage.apply(Cow::Borrowed(empty)).unwrap()
    } else {
        Cow::Borrowed(empty)
    };
    assert_eq!(result.as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية 简体中文",
    ));
}
