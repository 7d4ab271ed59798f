#[derive(Default)]
pub struct List {
    pub entries: Vec<u32>,
}

#[derive(Clone, Default)]
pub struct Configured;

#[derive(Default)]
pub struct Configs {
    pub seen: usize,
}

#[derive(Clone, Default)]
pub struct Builtins;

pub mod list_configuration {
    use super::List;

    ordconf::ordered_configuration!(List, pointer, document);
}

pub mod configured_configuration {
    use super::Configured;

    ordconf::ordered_configuration!(Configured);
}

pub mod configs_configuration {
    use super::Configs;

    ordconf::ordered_configuration!(Configs, pointer);
}

pub mod builtins_configuration {
    use super::Builtins;

    ordconf::ordered_configuration!(Builtins);
}

fn main() {
    use list_configuration::Configuration as _;

    let mut list = list_configuration::new_configuration(List::default(), Vec::new());
    list.add(vec![list_configuration::new_config(10, |list: &mut List| {
        list.entries.push(10);
        Ok(())
    })]);
    list.configure().unwrap();
    assert_eq!(list.get().entries, vec![10]);

    let mut configured = configured_configuration::new_configuration(Configured, Vec::new());
    configured_configuration::Configuration::configure(&mut configured).unwrap();
    assert!(configured_configuration::Configuration::configured(&configured));

    let mut configs = configs_configuration::new_configuration(
        Configs::default(),
        vec![configs_configuration::default_config(|configs: &mut Configs| {
            configs.seen += 1;
            Ok(())
        })],
    );
    configs_configuration::Configuration::configure(&mut configs).unwrap();
    assert_eq!(configs.get().seen, 1);

    let mut builtins = builtins_configuration::new_configuration(Builtins, Vec::new());
    builtins_configuration::Configuration::configure(&mut builtins).unwrap();
    assert_eq!(builtins.len(), 1);
}
