use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DemoConfig;
use crate::constants::ids;
use crate::controller::DemoController;
use crate::error::DemoError;
use crate::handlers::{dispatch, handle_message};
use crate::memory_page::MemoryPage;
use crate::message::Message;
use crate::page::Page;
use crate::state::AnimationState;

fn setup() -> (DemoController<MemoryPage>, StdRng) {
    let controller = DemoController::new(
        MemoryPage::demo(2),
        AnimationState::default(),
        &DemoConfig::default(),
    );
    (controller, StdRng::seed_from_u64(21))
}

#[test]
fn test_apply_animation_reads_selector() {
    let (mut controller, mut rng) = setup();
    let select = controller.page().element_by_id(ids::ANIMATION_SELECT).unwrap();
    controller.page_mut().set_value(select, "flip");

    handle_message(Message::ApplyAnimation, &mut controller, &mut rng).unwrap();

    let page = controller.page();
    let node = page.element_by_id(ids::INTERACTIVE_BOX).unwrap();
    assert!(page.has_class(&node, "flip"));
}

#[test]
fn test_calculate_timing_with_empty_inputs() {
    let (mut controller, mut rng) = setup();
    handle_message(Message::CalculateTiming, &mut controller, &mut rng).unwrap();

    let page = controller.page();
    let node = page.element_by_id(ids::TIMING_RESULT).unwrap();
    assert_eq!(page.text(node), "Total time: 0ms");
}

#[test]
fn test_start_stop_reset_messages() {
    let (mut controller, mut rng) = setup();
    handle_message(Message::StopAll, &mut controller, &mut rng).unwrap();
    assert!(!controller.state().all_animations_running);

    handle_message(Message::StartAll, &mut controller, &mut rng).unwrap();
    assert!(controller.state().all_animations_running);

    handle_message(Message::StopAll, &mut controller, &mut rng).unwrap();
    handle_message(Message::ResetAll, &mut controller, &mut rng).unwrap();
    assert!(controller.state().all_animations_running);
}

#[test]
fn test_handler_reports_missing_target() {
    let (mut controller, mut rng) = setup();
    let err =
        handle_message(Message::change_color("card-7"), &mut controller, &mut rng).unwrap_err();
    assert!(matches!(err, DemoError::MissingElement { .. }));
}

#[test]
fn test_dispatch_swallows_failures() {
    let (mut controller, mut rng) = setup();
    dispatch(Message::toggle("missing"), &mut controller, &mut rng);
    dispatch(Message::toggle("card-1"), &mut controller, &mut rng);

    let page = controller.page();
    let node = page.card_box("card-1").unwrap();
    assert!(page.has_class(&node, "paused"));
}
