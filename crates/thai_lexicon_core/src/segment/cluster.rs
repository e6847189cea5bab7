//! Thai character clusters.
//!
//! A cluster is the smallest unit a word boundary may fall around: a
//! consonant with its vowel signs and tone marks, a leading vowel with the
//! consonant after it, and a silenced consonant with the cluster before it.

fn is_consonant(c: char) -> bool {
    ('\u{0E01}'..='\u{0E2E}').contains(&c)
}

/// เ แ โ ใ ไ
fn is_leading_vowel(c: char) -> bool {
    ('\u{0E40}'..='\u{0E44}').contains(&c)
}

/// Vowel signs and marks that never begin a cluster.
fn is_attached(c: char) -> bool {
    matches!(c, '\u{0E30}'..='\u{0E3A}' | '\u{0E45}' | '\u{0E47}'..='\u{0E4E}')
}

/// A consonant followed by a thanthakhat, optionally after sara i or
/// sara u, is not pronounced.
fn silenced(rest: &[(usize, char)]) -> bool {
    matches!(
        rest,
        [(_, '\u{0E4C}'), ..] | [(_, '\u{0E34}' | '\u{0E38}'), (_, '\u{0E4C}'), ..]
    )
}

/// Byte offset of the start of every cluster in a run of Thai script.
pub(crate) fn cluster_starts(run: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = run.char_indices().collect();
    let mut starts = Vec::new();
    let mut k = 0;

    while k < chars.len() {
        starts.push(chars[k].0);
        let leading = is_leading_vowel(chars[k].1);
        k += 1;
        if leading && chars.get(k).is_some_and(|&(_, c)| is_consonant(c)) {
            k += 1;
        }

        // sara ii, sara uee and mai han open vowels closed by ย, อ and ว
        let (mut sara_ii, mut sara_uee, mut mai_han) = (false, false, false);
        while let Some(&(_, c)) = chars.get(k) {
            if is_attached(c) {
                match c {
                    '\u{0E35}' => sara_ii = true,
                    '\u{0E37}' => sara_uee = true,
                    '\u{0E31}' => mai_han = true,
                    _ => {}
                }
                k += 1;
            } else if (c == 'ย' && leading && sara_ii)
                || (c == 'อ' && leading && sara_uee)
                || (c == 'ว' && mai_han)
            {
                (sara_ii, sara_uee, mai_han) = (false, false, false);
                k += 1;
            } else if is_consonant(c) && silenced(&chars[k + 1..]) {
                k += 1;
                while chars.get(k).is_some_and(|&(_, c)| is_attached(c)) {
                    k += 1;
                }
            } else {
                break;
            }
        }
    }

    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(run: &str) -> Vec<&str> {
        let starts = cluster_starts(run);
        starts
            .iter()
            .zip(starts.iter().skip(1).chain(std::iter::once(&run.len())))
            .map(|(&start, &end)| &run[start..end])
            .collect()
    }

    #[test]
    fn vowels_stay_with_their_consonant() {
        assert_eq!(clusters("ไพเราะ"), vec!["ไพ", "เราะ"]);
        assert_eq!(clusters("ภาษา"), vec!["ภา", "ษา"]);
        assert_eq!(clusters("ชื่อ"), vec!["ชื่", "อ"]);
    }

    #[test]
    fn compound_vowels_are_closed() {
        assert_eq!(clusters("เสียงเพลง"), vec!["เสีย", "ง", "เพ", "ล", "ง"]);
        assert_eq!(clusters("เมือง"), vec!["เมือ", "ง"]);
        assert_eq!(clusters("ตัวอย่าง"), vec!["ตัว", "อ", "ย่า", "ง"]);
    }

    #[test]
    fn silenced_consonant_joins_previous_cluster() {
        assert_eq!(clusters("อาจารย์"), vec!["อา", "จา", "รย์"]);
        assert_eq!(clusters("ศักดิ์"), vec!["ศั", "กดิ์"]);
    }

    #[test]
    fn stray_marks_still_form_a_cluster() {
        assert_eq!(clusters("ะ"), vec!["ะ"]);
        assert_eq!(clusters("เ"), vec!["เ"]);
        assert!(clusters("").is_empty());
    }
}
