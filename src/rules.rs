//! The ordered ending-pattern rule table.
//!
//! Each rule pairs an ending pattern with a singular and a plural
//! replacement template. Iteration order IS the priority order: the
//! engine takes the first match, so exceptions sit at the top and broad
//! catch-alls at the bottom. Several consonant rules overlap on purpose;
//! the table must never be re-sorted or deduplicated, because an earlier
//! broad rule would shadow a later specific one for words outside the
//! regression set.
//!
//! Templates reference capture groups of the ending pattern as `${n}` and
//! may contain [`SINGLE_MARKER`], which the engine replaces with the
//! single representative letter of a matched doubled pair (`aa` → `a`).

use serde::Serialize;

use crate::placeholder;

/// The doubled-letter class a rule's templates depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleClass {
    /// A doubled long vowel: `aa`, `ee`, `oo`, `uu`.
    Vowel,
    /// A doubled consonant: `bb`, `dd`, .., `tt`.
    Consonant,
}

impl DoubleClass {
    /// The alternation of letter pairs this class stands for.
    pub fn pattern(self) -> &'static str {
        match self {
            DoubleClass::Vowel => placeholder::DOUBLE_SAME_VOWEL,
            DoubleClass::Consonant => placeholder::DOUBLE_SAME_CONSONANT,
        }
    }
}

/// Template marker replaced by the representative letter of a matched
/// doubled pair.
pub const SINGLE_MARKER: &str = ":SINGLE:";

/// One ending-pattern rule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InflectionRule {
    /// Ending pattern, possibly holding placeholder tokens and capture
    /// groups. Matched against the end of the word, case-insensitively.
    pub ending: &'static str,
    /// Replacement template producing the singular form.
    pub singular: &'static str,
    /// Replacement template producing the plural form.
    pub plural: &'static str,
    /// Set when the templates depend on which doubled letter matched.
    pub double: Option<DoubleClass>,
}

const fn rule(
    ending: &'static str,
    singular: &'static str,
    plural: &'static str,
) -> InflectionRule {
    InflectionRule {
        ending,
        singular,
        plural,
        double: None,
    }
}

const fn doubled(
    class: DoubleClass,
    ending: &'static str,
    singular: &'static str,
    plural: &'static str,
) -> InflectionRule {
    InflectionRule {
        ending,
        singular,
        plural,
        double: Some(class),
    }
}

/// The built-in rule table, in priority order.
pub static RULES: &[InflectionRule] = &[
    // Exceptions that must shadow every broader rule below them.
    rule("ei(eren)?", "ei", "eieren"),
    rule("vlo(oi|oien)?", "vlo", "vlooien"),
    rule("kal(f|veren)", "kalf", "kalveren"),
    rule("media", "media", "media"),
    rule("cris(is|es)", "crisis", "crises"),
    rule("tikel(s|en)?", "tikel", "tikelen"),
    rule("catalog(us|i)", "catalogus", "catalogi"),
    rule("geni(e|us|i[eë]n)", "genius", "genieën"),
    rule("aanb(od|iedingen)", "aanbod", "aanbiedingen"),
    rule("gel(id|ederen)", "gelid", "gelederen"),
    rule("gedrag(ingen)", "gedrag", "gedragingen"),
    rule("gen(ot|ietingen)", "genot", "genietingen"),
    rule("(adres|bordes)(sen)?", "${1}", "${1}sen"),
    rule("^(les)(sen)?", "${1}", "${1}sen"),
    rule("^lof", "lof", "lofbetuigingen"),
    rule("lof((uiting|betuiging)(en))", "lof${2}", "lof${2}en"),
    // Common special endings.
    rule(r"(\d)s?", "${1}", "${1}s"),
    rule("ties?", "tie", "ties"),
    rule("ie([eë]n)?", "ie", "ieën"),
    rule("taxi'?s?", "taxi", "taxi's"),
    // rede keeps its -nen plural, unlike vrede
    rule("^rede(nen)?", "${1}ede", "${1}edenen"),
    rule("(C)ende(nen)?", "${1}ende", "${1}endenen"),
    // English loanwords.
    rule("(url|set|uence|che|age)s?", "${1}", "${1}s"),
    rule("(ea|ai|ia)([dlmr])s?", "${1}${2}", "${1}${2}s"),
    rule("ngles?", "ngle", "ngles"),
    rule("ayout(s)?", "ayout", "ayouts"),
    rule("(V)ys?", "${1}y", "${1}ys"),
    rule("ss(es)?", "ss", "sses"),
    rule("(C)end", "${1}end", "${1}ends"),
    rule("chats?", "chat", "chats"),
    rule("shops?", "shop", "shops"),
    rule("tags?", "tag", "tags"),
    // French loanwords.
    rule("(pardon|coupon)s?", "${1}", "${1}s"),
    rule("(nn|V[cpqt])uis?", "${1}ui", "${1}uis"),
    rule("eaus?", "eau", "eaus"),
    // wortel -> wortels, partner -> partners
    rule("(V)(C{1,3})e([rlm])s?", "${1}${2}e${3}", "${1}${2}e${3}s"),
    // lade -> laden, bode -> bodes
    rule("ade", "ade", "aden"),
    rule("ode", "ode", "odes"),
    // museum -> musea
    rule("se(a|um)", "seum", "sea"),
    // boe -> boes, koe -> koeien, groei -> groeien
    rule("(boe)(s)?", "${1}", "${1}s"),
    rule("(oe)(ien)?", "${1}", "${1}ien"),
    rule("(oei)(en)?", "${1}", "${1}en"),
    // medium -> mediums
    rule("iums?", "ium", "iums"),
    // pagina -> pagina's
    rule("ina('s)?", "ina", "ina's"),
    // video -> videos
    rule("([aeo]{2})s?", "${1}", "${1}s"),
    // paragrafen and parafen drop to a single f
    rule("paragra(af|fen)", "paragraaf", "paragrafen"),
    rule("para(af|fen)", "paraaf", "parafen"),
    rule("auteurs?", "auteur", "auteurs"),
    rule("coureurs?", "coureur", "coureurs"),
    rule("typen?", "type", "typen"),
    // hoes -> hoezen, graaf -> graven, aas -> azen
    rule("(ie|oe|eu|ui|ei|ij)(f|ven)", "${1}f", "${1}ven"),
    rule("(ie|oe|eu|ui|ei|ij|iel)(s|zen)", "${1}s", "${1}zen"),
    doubled(DoubleClass::Vowel, "(DSV)f", "${1}f", ":SINGLE:ven"),
    rule("(V)ven", "${1}${1}f", "${1}ven"),
    doubled(DoubleClass::Vowel, "(DSV)s", "${1}s", ":SINGLE:zen"),
    rule("(V)zen", "${1}${1}s", "${1}zen"),
    // groet -> groeten, kleur -> kleuren
    rule("(oe|eu|ie|ij|ou)(C)(en)?", "${1}${2}", "${1}${2}en"),
    // bedrag -> bedragen
    rule("edrag(en)?", "edrag", "edragen"),
    // dak -> daken, pad -> paden
    rule("(dal|dak|pad|slot|vat|weg|aardappel)(en)?", "${1}", "${1}en"),
    // aap -> apen, loop -> lopen, materiaal -> materialen
    doubled(
        DoubleClass::Vowel,
        "(DSV)([dgklmnprt])",
        "${1}${2}",
        ":SINGLE:${2}en",
    ),
    rule("(C)(V!I)([dgklmnprt])en", "${1}${2}${2}${3}", "${1}${2}${3}en"),
    rule("i(V!I)([dgklmnprt])en", "i${1}${1}${2}", "i${1}${2}en"),
    rule("^a([gklpr])en", "aa${1}", "a${1}en"),
    rule("^o([gr])en", "oo${1}", "o${1}en"),
    // graf -> graven
    rule("gra(f|ven)", "graf", "graven"),
    // vis -> vissen, kanon -> kanonnen; plain -en endings stay out of here
    rule("(V)([bdfgklmprst])(en)?", "${1}${2}", "${1}${2}${2}en"),
    rule("(V)([bdfklmnprst])([aoui])n", "${1}${2}${3}n", "${1}${2}${3}nnen"),
    doubled(DoubleClass::Consonant, "(V)(DSC)en", "${1}:SINGLE:", "${1}${2}en"),
    // bon -> bonnen
    rule("^(C)([aeoui])n", "${1}${2}n", "${1}${2}nnen"),
    // trailing -en with no better rule: assume an already-plural form
    rule("(C)en", "${1}", "${1}en"),
    // tekst -> teksten
    rule("(V)kst(en)?", "${1}kst", "${1}ksten"),
    rule("ijst(en)?", "ijst", "ijsten"),
    // abbreviations such as pdf
    rule("([bcdfghjklmnpqrtvwxyz]{3})s?", "${1}", "${1}s"),
    rule("([aeo])s?", "${1}", "${1}s"),
];
