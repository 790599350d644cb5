use anyhow::{Result, anyhow};

use demolens_packet::formatter::OutputWriter;
use demolens_packet::{RegistrySet, TypeRegistry};

use crate::args::ArgsTypes;

pub fn run(args: &ArgsTypes) -> Result<()> {
    let registries = RegistrySet::standard();
    let mut writer = OutputWriter::new(None)?;
    for registry in select(&registries, args.registry.as_deref())? {
        write_registry(&mut writer, registry)?;
    }
    writer.flush()
}

fn select<'a>(
    registries: &'a RegistrySet,
    name: Option<&str>,
) -> Result<Vec<&'a dyn TypeRegistry>> {
    match name {
        Some(name) => registries
            .find(name)
            .map(|registry| vec![registry])
            .ok_or_else(|| anyhow!("Unknown registry: {}", name)),
        None => Ok(std::iter::once(registries.command_registry())
            .chain(registries.packet_registries())
            .collect()),
    }
}

fn write_registry(writer: &mut OutputWriter, registry: &dyn TypeRegistry) -> Result<()> {
    let types = registry.types();
    let decodable = types.iter().filter(|t| t.has_decoder()).count();
    writer.writeln(&format!(
        "{} ({} types, {} decodable)",
        registry.name(),
        types.len(),
        decodable
    ))?;
    for message_type in types {
        let marker = if message_type.has_decoder() {
            ""
        } else {
            "  (no decoder)"
        };
        writer.writeln(&format!(
            "  {:>4}  {}{}",
            message_type.code, message_type.name, marker
        ))?;
    }
    writer.writeln("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        let registries = RegistrySet::standard();
        let all = select(&registries, None).unwrap();
        let names: Vec<_> = all.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            [
                "EDemoCommands",
                "NET_Messages",
                "SVC_Messages",
                "EBaseUserMessages",
                "EBaseGameEvents"
            ]
        );

        let one = select(&registries, Some("net_messages")).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].name(), "NET_Messages");

        let Err(err) = select(&registries, Some("nope")) else {
            panic!("expected an unknown registry");
        };
        assert_eq!(err.to_string(), "Unknown registry: nope");
    }
}
