/*!
# `BEEP <duration>,<pitch>`

## Purpose
Sounds a tone for `<duration>` milliseconds.

## Remarks
The program waits while the tone plays. Break is checked every
20 milliseconds so a long tone can be stopped. A negative duration
is an `ARITHMETIC OVERFLOW`. What `<pitch>` sounds like is up to the
machine; the terminal rings its bell.

## Example
```text
10 FOR I=1 TO 3
20 BEEP 100,I*10
30 NEXT I
```

*/
