use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Comandos do FURIA Bot:")]
pub enum Command {
    #[command(description = "Inicia o bot")]
    Start,
    #[command(description = "Mostra ajuda")]
    Help,
}
