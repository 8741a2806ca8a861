//! Manual session control.
//!
//! The control panel is an in-world [`UIPanel`] with start/pause/resume/stop
//! buttons; the host's UI layer marks buttons clicked and this system turns
//! those clicks into scenario commands. The off hand's primary button toggles
//! the panel in and out of view, and the panel's label always shows the
//! current state and score.

use hecs::World;

use crate::{
    components::{UIPanel, Visible},
    config::Config,
    contexts::{InputContext, ScenarioContext},
};

/// Apply panel clicks to the scenario and refresh the panel display.
pub fn scenario_system(
    world: &mut World,
    input_context: &InputContext,
    scenario_context: &mut ScenarioContext,
    config: &Config,
) {
    if input_context
        .other_hand(config.dominant_hand)
        .primary_button_just_pressed()
    {
        toggle_panels(world);
    }

    for (_, panel) in world.query_mut::<&mut UIPanel>() {
        for button in &mut panel.buttons {
            if button.clicked_this_frame {
                match button.text.as_str() {
                    "Start" => scenario_context.start(),
                    "Pause" => scenario_context.pause(),
                    "Resume" => scenario_context.resume(),
                    "Stop" => scenario_context.stop(),
                    _ => {}
                }
            }
            button.clicked_this_frame = false;
            button.hovered_last_frame = button.hovered_this_frame;
            button.hovered_this_frame = false;
        }

        panel.text = format!(
            "{:?}\nCorrect: {} Incorrect: {}",
            scenario_context.state, scenario_context.correct, scenario_context.incorrect
        );
    }
}

fn toggle_panels(world: &mut World) {
    let panels = world
        .query_mut::<&UIPanel>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect::<Vec<_>>();
    for entity in panels {
        if world.get::<&Visible>(entity).is_ok() {
            let _ = world.remove_one::<Visible>(entity);
        } else {
            let _ = world.insert_one(entity, Visible {});
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hecs::Entity;

    use crate::{
        components::UIPanelButton,
        contexts::input_context::{ControllerFrame, HandSample},
        contexts::scenario_context::ScenarioState,
    };

    fn control_panel(world: &mut World) -> Entity {
        world.spawn((
            UIPanel {
                text: String::new(),
                buttons: vec![
                    UIPanelButton::new("Start"),
                    UIPanelButton::new("Pause"),
                    UIPanelButton::new("Resume"),
                    UIPanelButton::new("Stop"),
                ],
            },
            Visible {},
        ))
    }

    fn click(world: &mut World, panel: Entity, button_text: &str) {
        let mut ui_panel = world.get::<&mut UIPanel>(panel).unwrap();
        let button = ui_panel
            .buttons
            .iter_mut()
            .find(|b| b.text == button_text)
            .unwrap();
        button.clicked_this_frame = true;
    }

    #[test]
    pub fn test_clicks_drive_the_scenario() {
        let mut world = World::new();
        let panel = control_panel(&mut world);
        let input_context = InputContext::default();
        let mut scenario_context = ScenarioContext::default();
        let config = Config::default();

        click(&mut world, panel, "Start");
        scenario_system(&mut world, &input_context, &mut scenario_context, &config);
        assert_eq!(scenario_context.state, ScenarioState::Running);

        // Click is consumed; running the system again changes nothing.
        scenario_system(&mut world, &input_context, &mut scenario_context, &config);
        assert_eq!(scenario_context.state, ScenarioState::Running);

        click(&mut world, panel, "Pause");
        scenario_system(&mut world, &input_context, &mut scenario_context, &config);
        assert_eq!(scenario_context.state, ScenarioState::Paused);

        let text = world.get::<&UIPanel>(panel).unwrap().text.clone();
        assert!(text.contains("Paused"));
        assert!(text.contains("Correct: 0"));
    }

    #[test]
    pub fn test_invalid_clicks_are_ignored() {
        let mut world = World::new();
        let panel = control_panel(&mut world);
        let input_context = InputContext::default();
        let mut scenario_context = ScenarioContext::default();
        let config = Config::default();

        click(&mut world, panel, "Resume");
        scenario_system(&mut world, &input_context, &mut scenario_context, &config);
        assert_eq!(scenario_context.state, ScenarioState::Idle);
    }

    #[test]
    pub fn test_off_hand_button_toggles_panel() {
        let mut world = World::new();
        let panel = control_panel(&mut world);
        let mut input_context = InputContext::default();
        let mut scenario_context = ScenarioContext::default();
        let config = Config::default();

        // Right hand is dominant, so the left primary button drives the panel.
        let press = ControllerFrame {
            left: Some(HandSample {
                primary_button: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        input_context.update(&press);
        scenario_system(&mut world, &input_context, &mut scenario_context, &config);
        assert!(world.get::<&Visible>(panel).is_err());

        // Held button is not an edge.
        input_context.update(&press);
        scenario_system(&mut world, &input_context, &mut scenario_context, &config);
        assert!(world.get::<&Visible>(panel).is_err());

        let release = ControllerFrame {
            left: Some(HandSample::default()),
            ..Default::default()
        };
        input_context.update(&release);
        input_context.update(&press);
        scenario_system(&mut world, &input_context, &mut scenario_context, &config);
        assert!(world.get::<&Visible>(panel).is_ok());
    }
}
