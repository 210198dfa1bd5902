/*!
# `FOR <variable>=x TO y`

## Purpose
Used with `NEXT` to repeat the lines between them.

## Remarks
The variable gets x and the loop remembers y and the line after the
`FOR`. Each `NEXT` adds 1 and goes back to that line unless the
variable has passed y. The body always runs at least once. There is
no `STEP`.

## Example
```text
10 FOR I=1 TO 3
20 PRINT I;
30 NEXT I
RUN
123
0/30
```

*/
