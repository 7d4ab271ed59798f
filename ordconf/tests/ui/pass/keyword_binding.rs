#[derive(Default)]
pub struct Type {
    pub name: String,
}

pub mod type_configuration {
    use super::Type;

    ordconf::ordered_configuration!(Type, pointer);
}

use type_configuration::{ConfigError, ConfigFn, Configuration, new_configuration};

fn main() {
    let rename = |ty: &mut Type| -> Result<(), ConfigError> {
        ty.name.push_str("u32");
        Ok(())
    };

    let mut configuration = new_configuration(Type::default(), Vec::new());
    configuration.add_fn(vec![Box::new(rename) as ConfigFn]);
    configuration.configure().unwrap();
    assert_eq!(configuration.get().name, "u32");
}
