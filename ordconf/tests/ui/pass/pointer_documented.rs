#[derive(Default)]
pub struct Engine {
    pub cylinders: u8,
}

pub mod engine_configuration {
    use super::Engine;

    ordconf::ordered_configuration!(Engine, document, pointer);
}

use engine_configuration::{Configuration, default_config, new_configuration};

fn main() {
    let mut configuration = new_configuration(
        Engine::default(),
        vec![default_config(|engine: &mut Engine| {
            engine.cylinders = 6;
            Ok(())
        })],
    );
    configuration.configure().unwrap();
    assert_eq!(configuration.into_inner().cylinders, 6);
}
