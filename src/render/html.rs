//! Branded, self-contained HTML transcript page.
//!
//! One document: header, optional metadata block, paragraph-split full text,
//! a live search box, and the segment list. All dynamic text is escaped on
//! the way in; the embedded search script re-escapes on the way back into the
//! DOM so transcript content can never execute.

use crate::paragraphs::{split_into_paragraphs, DEFAULT_SENTENCES_PER_PARAGRAPH};
use crate::timecode::{seconds_to_display, seconds_to_duration};
use crate::{Provenance, Transcript};

/* Brand palette: maroon #8C1D40, gold #FFC627 */
const STYLE: &str = r#"        body {
            font-family: Arial, "Helvetica Neue", sans-serif;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
            background: #f5f5f5;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        h1 {
            color: #8C1D40;
            border-bottom: 3px solid #FFC627;
            padding-bottom: 10px;
            font-weight: bold;
        }
        .metadata {
            background: #FFF9E6;
            padding: 15px;
            border-radius: 5px;
            margin: 20px 0;
            border-left: 4px solid #8C1D40;
        }
        .metadata p {
            margin: 5px 0;
            color: #191919;
        }
        .metadata a {
            color: #8C1D40;
            text-decoration: underline;
        }
        .metadata a:hover {
            color: #6d1632;
        }
        .full-text {
            margin: 30px 0;
            padding: 20px;
            background: #FFF9E6;
            border-radius: 5px;
            border-left: 4px solid #FFC627;
        }
        .full-text h2 {
            margin-top: 0;
            color: #8C1D40;
            font-weight: bold;
        }
        .full-text p {
            margin-bottom: 1em;
            line-height: 1.8;
        }
        .segments {
            margin: 30px 0;
        }
        .segment {
            margin: 15px 0;
            padding: 15px;
            background: #fff;
            border: 1px solid #dee2e6;
            border-radius: 5px;
            transition: all 0.2s;
        }
        .segment:hover {
            box-shadow: 0 2px 8px rgba(140, 29, 64, 0.2);
            border-color: #8C1D40;
        }
        .timestamp {
            display: inline-block;
            background: #8C1D40;
            color: white;
            padding: 4px 12px;
            border-radius: 4px;
            font-size: 0.85em;
            font-weight: bold;
            margin-right: 10px;
            min-width: 80px;
            text-align: center;
        }
        .text {
            display: inline;
            color: #191919;
        }
        .search-box {
            margin: 20px 0;
            padding: 15px;
            background: #FFF9E6;
            border: 2px solid #8C1D40;
            border-radius: 5px;
        }
        .search-box input {
            width: 100%;
            padding: 10px;
            font-size: 16px;
            border: 1px solid #8C1D40;
            border-radius: 4px;
        }
        .search-box input:focus {
            outline: none;
            border-color: #FFC627;
            box-shadow: 0 0 0 3px rgba(255, 198, 39, 0.3);
        }
        .highlight {
            background-color: #FFC627;
            font-weight: bold;
            color: #000;
        }
        .sr-only {
            position: absolute;
            width: 1px;
            height: 1px;
            padding: 0;
            margin: -1px;
            overflow: hidden;
            clip: rect(0, 0, 0, 0);
            white-space: nowrap;
            border-width: 0;
        }
        .skip-link {
            position: absolute;
            top: -40px;
            left: 0;
            background: #8C1D40;
            color: white;
            padding: 8px;
            text-decoration: none;
            z-index: 100;
        }
        .skip-link:focus {
            top: 0;
        }
        a:focus, button:focus, input:focus {
            outline: 3px solid #FFC627;
            outline-offset: 2px;
        }
        @media print {
            body {
                background: white;
            }
            .container {
                box-shadow: none;
            }
            .search-box, .skip-link {
                display: none;
            }
        }
"#;

const SEARCH_SCRIPT: &str = r#"        const searchInput = document.getElementById('searchInput');
        const segmentsRegion = document.getElementById('segments');
        const fullText = document.querySelector('.full-text');

        const paragraphOriginals = Array.from(fullText.querySelectorAll('p')).map(p => p.textContent);
        const segmentOriginals = Array.from(segmentsRegion.getElementsByClassName('segment')).map(seg => {
            const span = seg.querySelector('.text');
            return span ? span.textContent : seg.textContent;
        });

        const escapeHtml = value => value
            .replace(/&/g, '&amp;')
            .replace(/</g, '&lt;')
            .replace(/>/g, '&gt;')
            .replace(/"/g, '&quot;');
        const escapeRegex = value => value.replace(/[.*+?^${}()|[\]\\]/g, '\\$&');
        const highlight = (original, pattern) => original
            .split(pattern)
            .map((chunk, i) => i % 2 === 1
                ? '<span class="highlight">' + escapeHtml(chunk) + '</span>'
                : escapeHtml(chunk))
            .join('');

        searchInput.addEventListener('input', function () {
            const term = this.value.toLowerCase();
            const segmentDivs = Array.from(segmentsRegion.getElementsByClassName('segment'));

            if (term === '') {
                fullText.querySelectorAll('p').forEach((p, i) => {
                    p.textContent = paragraphOriginals[i];
                });
                segmentDivs.forEach((div, i) => {
                    div.style.display = 'block';
                    const span = div.querySelector('.text');
                    if (span) {
                        span.textContent = segmentOriginals[i];
                    }
                });
                return;
            }

            const pattern = new RegExp('(' + escapeRegex(term) + ')', 'gi');

            fullText.querySelectorAll('p').forEach((p, i) => {
                const original = paragraphOriginals[i];
                p.innerHTML = original.toLowerCase().includes(term)
                    ? highlight(original, pattern)
                    : escapeHtml(original);
            });

            segmentDivs.forEach((div, i) => {
                const original = segmentOriginals[i];
                if (original.toLowerCase().includes(term)) {
                    div.style.display = 'block';
                    const span = div.querySelector('.text');
                    if (span) {
                        span.innerHTML = highlight(original, pattern);
                    }
                } else {
                    div.style.display = 'none';
                }
            });
        });
"#;

/// Render the transcript as one self-contained HTML page.
///
/// The timestamp badge appears only when the transcript carries real timing;
/// the metadata block appears only when there is something to show (a real
/// duration, or provenance).
pub fn render_html(
    transcript: &Transcript,
    display_title: &str,
    provenance: Option<&Provenance>,
) -> String {
    let title = html_escape(display_title);
    let has_timestamps = transcript.has_timestamps();
    let metadata = metadata_block(transcript, display_title, provenance);

    let mut paragraphs = String::new();
    for paragraph in split_into_paragraphs(&transcript.text, DEFAULT_SENTENCES_PER_PARAGRAPH) {
        paragraphs.push_str(&format!("            <p>{}</p>\n", html_escape(&paragraph)));
    }

    let mut segments = String::new();
    for segment in &transcript.segments {
        let text = html_escape(segment.text.trim());
        if has_timestamps {
            segments.push_str(&format!(
                "            <div class=\"segment\">\n                <span class=\"timestamp\">{}</span>\n                <span class=\"text\">{}</span>\n            </div>\n",
                seconds_to_display(segment.start),
                text
            ));
        } else {
            segments.push_str(&format!(
                "            <div class=\"segment\">\n                <span class=\"text\">{}</span>\n            </div>\n",
                text
            ));
        }
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Transcript: {title}</title>
    <style>
{style}    </style>
</head>
<body>
    <a href="#main-content" class="skip-link">Skip to main content</a>

    <div class="container">
        <h1 id="main-content" tabindex="-1">Transcript: {title}</h1>

        {metadata}
        <div class="search-box">
            <label for="searchInput" class="sr-only">Search transcript</label>
            <input type="text" id="searchInput" placeholder="Search transcript..." aria-label="Search transcript">
        </div>

        <div class="full-text">
            <h2>Full Transcript</h2>
{paragraphs}        </div>

        <h2>Transcript Segments</h2>
        <div class="segments" id="segments" role="region" aria-label="Transcript segments">
{segments}        </div>
    </div>

    <script>
{script}    </script>
</body>
</html>
"##,
        title = title,
        style = STYLE,
        metadata = metadata,
        paragraphs = paragraphs,
        segments = segments,
        script = SEARCH_SCRIPT,
    )
}

fn metadata_block(
    transcript: &Transcript,
    display_title: &str,
    provenance: Option<&Provenance>,
) -> String {
    let mut rows = String::new();
    if transcript.has_timestamps() {
        rows.push_str(&format!(
            "<p><strong>Duration:</strong> {}</p>",
            seconds_to_duration(transcript.duration_seconds())
        ));
    }
    if let Some(provenance) = provenance {
        if let Some(url) = &provenance.url {
            rows.push_str(&format!(
                "<p><strong>Original video link:</strong> <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
                html_escape(url),
                html_escape(display_title)
            ));
        }
        if let Some(author) = &provenance.author {
            rows.push_str(&format!(
                "<p><strong>Author:</strong> {}</p>",
                html_escape(author)
            ));
        }
    }

    if rows.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"metadata\" role=\"contentinfo\" aria-label=\"Video information\">{}</div>\n",
            rows
        )
    }
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;

    fn timed_transcript() -> Transcript {
        Transcript::from_segments(
            vec![
                Segment {
                    start: 1.0,
                    end: 3.0,
                    text: "First thing said.".to_string(),
                },
                Segment {
                    start: 3.0,
                    end: 100.0,
                    text: "Second thing said.".to_string(),
                },
            ],
            "en",
        )
    }

    #[test]
    fn timed_transcripts_show_timestamp_badges() {
        let html = render_html(&timed_transcript(), "Demo", None);
        assert!(html.contains("<span class=\"timestamp\">00:01</span>"));
        assert!(html.contains("<span class=\"timestamp\">00:03</span>"));
    }

    #[test]
    fn untimed_transcripts_omit_every_badge() {
        let transcript = crate::parsers::parse_text("Para one.\n\nPara two.").unwrap();
        let html = render_html(&transcript, "Demo", None);
        assert!(!html.contains("class=\"timestamp\""));
    }

    #[test]
    fn duration_appears_only_with_real_timing() {
        let html = render_html(&timed_transcript(), "Demo", None);
        assert!(html.contains("<strong>Duration:</strong> 1m 40s"));

        let untimed = crate::parsers::parse_text("Only text.").unwrap();
        let html = render_html(&untimed, "Demo", None);
        assert!(!html.contains("Duration:"));
    }

    #[test]
    fn provenance_renders_link_and_author() {
        let provenance = Provenance {
            url: Some("https://youtu.be/abc123".to_string()),
            author: Some("Jordan".to_string()),
            title: None,
        };
        let html = render_html(&timed_transcript(), "Demo Clip", Some(&provenance));
        assert!(html.contains("href=\"https://youtu.be/abc123\""));
        assert!(html.contains(">Demo Clip</a>"));
        assert!(html.contains("<strong>Author:</strong> Jordan"));
    }

    #[test]
    fn dynamic_text_is_escaped() {
        let transcript = Transcript::from_segments(
            vec![Segment {
                start: 1.0,
                end: 2.0,
                text: "<script>alert('x')</script>".to_string(),
            }],
            "en",
        );
        let html = render_html(&transcript, "<b>Title</b> & more", None);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Transcript: &lt;b&gt;Title&lt;/b&gt; &amp; more"));
    }

    #[test]
    fn search_widget_is_embedded() {
        let html = render_html(&timed_transcript(), "Demo", None);
        assert!(html.contains("id=\"searchInput\""));
        assert!(html.contains("searchInput.addEventListener('input'"));
        assert!(html.contains("class=\"highlight\""));
    }

    #[test]
    fn paragraphs_come_from_the_segmenter() {
        let text = (1..=5)
            .map(|i| format!("Sentence {}.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let transcript = Transcript {
            segments: vec![Segment {
                start: 0.0,
                end: 2.0,
                text: text.clone(),
            }],
            text,
            language: "en".to_string(),
        };
        let html = render_html(&transcript, "Demo", None);
        assert_eq!(html.matches("<p>").count(), 2);
    }
}
