//! Button triggers and the two inline keyboards.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Content groupings the bot can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Csgo,
    Valorant,
    Schedule,
    Results,
    News,
    Chant,
    Store,
    Social,
}

/// What a keyboard button sends back as callback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Show(Category),
    MainMenu,
}

impl Trigger {
    pub fn id(self) -> &'static str {
        match self {
            Trigger::Show(Category::Csgo) => "csgo",
            Trigger::Show(Category::Valorant) => "valorant",
            Trigger::Show(Category::Schedule) => "proximos_jogos",
            Trigger::Show(Category::Results) => "ultimos_resultados",
            Trigger::Show(Category::News) => "noticias",
            Trigger::Show(Category::Chant) => "grito",
            Trigger::Show(Category::Store) => "loja",
            Trigger::Show(Category::Social) => "instagram",
            Trigger::MainMenu => "menu_principal",
        }
    }

    /// Exact match on a callback id; anything else is `None`.
    pub fn parse(id: &str) -> Option<Self> {
        let trigger = match id {
            "csgo" => Trigger::Show(Category::Csgo),
            "valorant" => Trigger::Show(Category::Valorant),
            "proximos_jogos" => Trigger::Show(Category::Schedule),
            "ultimos_resultados" => Trigger::Show(Category::Results),
            "noticias" => Trigger::Show(Category::News),
            "grito" => Trigger::Show(Category::Chant),
            "loja" => Trigger::Show(Category::Store),
            "instagram" => Trigger::Show(Category::Social),
            "menu_principal" => Trigger::MainMenu,
            _ => return None,
        };
        Some(trigger)
    }

    pub fn label(self) -> &'static str {
        match self {
            Trigger::Show(Category::Csgo) => "🎮 CS:GO 2",
            Trigger::Show(Category::Valorant) => "💥 Valorant",
            Trigger::Show(Category::Schedule) => "📅 Jogos",
            Trigger::Show(Category::Results) => "🏆 Resultados",
            Trigger::Show(Category::News) => "📰 Notícias",
            Trigger::Show(Category::Chant) => "🔥 Grito de Guerra",
            Trigger::Show(Category::Store) => "🛒 Loja",
            Trigger::Show(Category::Social) => "📸 Instagram",
            Trigger::MainMenu => "🔙 Voltar ao Menu",
        }
    }

    fn button(self) -> InlineKeyboardButton {
        InlineKeyboardButton::callback(self.label(), self.id())
    }
}

/// Which keyboard accompanies a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Category buttons only.
    MainMenu,
    /// Category buttons plus a back-to-menu row.
    Detail,
}

const MENU_ROWS: [[Category; 2]; 4] = [
    [Category::Csgo, Category::Valorant],
    [Category::Schedule, Category::Results],
    [Category::News, Category::Chant],
    [Category::Store, Category::Social],
];

pub fn markup(screen: Screen) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = MENU_ROWS
        .iter()
        .map(|row| row.iter().map(|&c| Trigger::Show(c).button()).collect())
        .collect();
    if screen == Screen::Detail {
        rows.push(vec![Trigger::MainMenu.button()]);
    }
    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_ids(markup: &InlineKeyboardMarkup) -> Vec<Vec<String>> {
        markup
            .inline_keyboard
            .iter()
            .map(|row| {
                row.iter()
                    .map(|b| match &b.kind {
                        InlineKeyboardButtonKind::CallbackData(data) => data.clone(),
                        other => panic!("unexpected button kind {other:?}"),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_ids_round_trip() {
        let all = MENU_ROWS
            .iter()
            .flatten()
            .map(|&c| Trigger::Show(c))
            .chain([Trigger::MainMenu]);
        for trigger in all {
            assert_eq!(Trigger::parse(trigger.id()), Some(trigger));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Trigger::parse("tiktok"), None);
        assert_eq!(Trigger::parse(""), None);
        assert_eq!(Trigger::parse("CSGO"), None);
    }

    #[test]
    fn test_main_menu_layout() {
        let ids = callback_ids(&markup(Screen::MainMenu));
        assert_eq!(
            ids,
            vec![
                vec!["csgo", "valorant"],
                vec!["proximos_jogos", "ultimos_resultados"],
                vec!["noticias", "grito"],
                vec!["loja", "instagram"],
            ]
        );
    }

    #[test]
    fn test_detail_adds_back_row() {
        let ids = callback_ids(&markup(Screen::Detail));
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[4], vec!["menu_principal"]);
    }
}
