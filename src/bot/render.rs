//! MarkdownV2 formatters over the content store.
//!
//! Literal template text below is pre-escaped. Anything taken from the
//! store goes through [`escape`].

use crate::content::{ContentStore, Game, Outcome};
use crate::markup::{escape, link};

use super::keyboard::Category;
use super::pick::Pick;

/// Escaped random pick from a pool; the store guarantees pools are non-empty.
fn pick_escaped<P: Pick>(pick: &mut P, pool: &[String]) -> String {
    pick.pick(pool).map(|s| escape(s)).unwrap_or_default()
}

pub fn roster(store: &ContentStore, game: Game) -> String {
    let emoji = game.emoji();
    let mut out = format!("{emoji} *{} \\- ELENCO DA FURIA* {emoji}\n\n", escape(game.title()));
    for player in store.roster(game) {
        let role = if player.role.is_empty() {
            String::new()
        } else {
            format!(" \n_{}_", escape(&player.role))
        };
        out.push_str(&format!(
            "➤ *{}*{} \\(*{} anos*\\)\n",
            escape(&player.name),
            role,
            player.age
        ));
    }
    out
}

/// Both rosters, for generic "team/player" questions.
pub fn full_roster(store: &ContentStore) -> String {
    format!(
        "Escolha o jogo:\n\n{}\n{}",
        roster(store, Game::Csgo),
        roster(store, Game::Valorant)
    )
}

pub fn schedule(store: &ContentStore) -> String {
    let mut out = String::from("📅 *PRÓXIMOS JOGOS* 📅");
    for game in Game::ALL {
        out.push_str(&format!(
            "\n\n{} *{}*\n\n{}",
            game.emoji(),
            escape(game.title()),
            escape(store.schedule(game))
        ));
    }
    out
}

fn game_results(store: &ContentStore, game: Game) -> String {
    let lines: Vec<String> = store
        .results(game)
        .iter()
        .map(|r| {
            let outcome = match game.outcome(&r.score) {
                Outcome::Win => "✅ *VITÓRIA*",
                Outcome::Loss => "❌ *DERROTA*",
            };
            let opponent = escape(&r.opponent);
            let score = escape(&r.score);
            let matchup = match game {
                Game::Csgo => format!("vs {opponent} {score}"),
                Game::Valorant => format!("FURIA {score} vs {opponent}"),
            };
            format!("➤ {outcome}\n{matchup}\n\\({}\\)", escape(&r.event))
        })
        .collect();

    format!(
        "🏆 *ÚLTIMOS RESULTADOS* 🏆\n\n{} *{}*\n\n{}",
        game.emoji(),
        escape(game.title()),
        lines.join("\n")
    )
}

pub fn results(store: &ContentStore) -> String {
    format!(
        "{}\n\n{}",
        game_results(store, Game::Csgo),
        game_results(store, Game::Valorant)
    )
}

pub fn news(store: &ContentStore) -> String {
    let items: Vec<String> = store
        .news()
        .iter()
        .map(|item| format!("➤ {}\n", escape(item.as_str())))
        .collect();
    let source = &store.links().news;
    format!(
        "📰 *ÚLTIMAS NOTÍCIAS* 📰\n\n{}\n\n🔍 _Mais em:_ {}",
        items.join("\n"),
        link(&source.label, &source.url)
    )
}

pub fn chant<P: Pick>(store: &ContentStore, pick: &mut P) -> String {
    format!("🔥 *GRITO DE GUERRA* 🔥\n\n*{}*", pick_escaped(pick, store.chants()))
}

pub fn store_link(store: &ContentStore) -> String {
    let shop = &store.links().store;
    format!(
        "🛒 *Loja Oficial da FURIA*\n\nConfira nossos produtos em: {}",
        link(&shop.label, &shop.url)
    )
}

pub fn social(store: &ContentStore) -> String {
    let insta = &store.links().instagram;
    format!("📸 *Instagram Oficial*\n\nAcesse: {}", link(&insta.label, &insta.url))
}

pub fn category<P: Pick>(store: &ContentStore, category: Category, pick: &mut P) -> String {
    match category {
        Category::Csgo => roster(store, Game::Csgo),
        Category::Valorant => roster(store, Game::Valorant),
        Category::Schedule => schedule(store),
        Category::Results => results(store),
        Category::News => news(store),
        Category::Chant => chant(store, pick),
        Category::Store => store_link(store),
        Category::Social => social(store),
    }
}

pub fn main_menu<P: Pick>(store: &ContentStore, pick: &mut P) -> String {
    format!(
        "🐆 *{}* 🐆\n\n⚡ *O que vamos ver agora\\?*",
        pick_escaped(pick, store.greetings())
    )
}

pub fn welcome<P: Pick>(store: &ContentStore, pick: &mut P) -> String {
    format!(
        "🐆🔥 *{}* 🔥🐆\n\n\
         🤖 *Eu sou o FURIA Bot\\, seu pitaco eletrônico sobre tudo da Pantera\\!*\n\n\
         ⚡ *Vamo nessa\\! O que você quer saber hoje\\?*\n\n\
         • 🎮 _CS\\:GO 2 \\- Elenco e informações_ \n\
         • 💥 _Valorant \\- Time brasileiro no VCT_ \n\
         • 📅 _Próximos jogos \\- Quando a FURIA vai comer\\?_ \n\
         • 🏆 _Resultados recentes \\- Vitórias e aprendizados_ \n\
         • 📰 _Notícias quentinhas direto do draft5_ \n\
         • 🔥 _Gritos de guerra \\- Pra botar pra quebrar\\!_ \n\
         • 🛍️ _Loja oficial \\- Mostra que você é furioso_ \n\n\
         🎙️ *Dica\\:* Me chame no privado ou use os botões abaixo\\!",
        pick_escaped(pick, store.greetings())
    )
}

pub fn help() -> String {
    String::from(
        "🐆 *Como falar comigo* 🐆\n\n\
         Use os botões ou mande uma mensagem com um destes assuntos:\n\n\
         • 🎮 _csgo, cs2_ \\- elenco de CS\\:GO 2\n\
         • 💥 _valorant_ \\- elenco de Valorant\n\
         • 👥 _time, jogadores_ \\- os dois elencos\n\
         • 📅 _próximo jogo, calendário_ \\- agenda\n\
         • 🏆 _resultado, partidas_ \\- últimos resultados\n\
         • 📰 _notícia, novidade_ \\- notícias\n\
         • 🔥 _grito, vamo_ \\- grito de guerra\n\
         • 📸 _instagram, foto_ \\- rede social\n\
         • 🛒 _loja, comprar_ \\- loja oficial",
    )
}

/// Fallback for text that matched no keyword.
pub fn fallback<P: Pick>(store: &ContentStore, pick: &mut P) -> String {
    pick_escaped(pick, store.fallbacks())
}
